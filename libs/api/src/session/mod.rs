use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};

use axum_extra::headers;
use axum_extra::TypedHeader;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info};

pub mod request;
pub mod response;
pub mod state;

use crate::agent::{
    analyst::AnalystAgent, copywriter::CopywriterAgent, Agent,
};
use crate::analysis::normalize_url;
use crate::copy::request::GenerateAdCopyRequest;
use crate::parse::{AdCopy, WebsiteAnalysis};
use crate::response::user_message;
use crate::ApiState;

use self::request::{Action, Field};
use self::response::Snapshot;
use self::state::FormState;

// Outcomes carry the fixed user-facing message; the error chain is logged
// by the task that produced it.
enum Outcome {
    Generation(Result<AdCopy, String>),
    Analysis(Result<WebsiteAnalysis, String>),
}

pub async fn ws(
    ws: WebSocketUpgrade,
    user_agent: Option<TypedHeader<headers::UserAgent>>,
    State(state): State<ApiState>,
) -> Response {
    let user_agent = if let Some(TypedHeader(user_agent)) = user_agent {
        user_agent.to_string()
    } else {
        String::from("Unknown browser")
    };
    info!("`{user_agent}` connected.");
    ws.on_upgrade(|socket| handler(socket, state))
}

async fn handler(socket: WebSocket, state: ApiState) {
    info!("Connection opened");

    let (mut sender, mut receiver) = socket.split();
    let mut form = FormState::default();
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<Outcome>(8);

    send_snapshot(&mut sender, &form).await;

    loop {
        tokio::select! {
            msg = receiver.next() => {
                let Some(Ok(msg)) = msg else {
                    info!("Connection closed");
                    return;
                };

                match msg {
                    Message::Close(_) => {
                        info!("Connection closed");
                        return;
                    }
                    Message::Text(text) => {
                        match serde_json::from_str::<Action>(&text) {
                            Ok(action) => {
                                apply_action(
                                    action,
                                    &mut form,
                                    &state,
                                    &outcome_tx,
                                );
                                send_snapshot(&mut sender, &form).await;
                            }
                            Err(e) => {
                                error!(
                                    task = "parse action",
                                    error = e.to_string()
                                );
                                let _ = sender
                                    .send(Message::Text(
                                        "invalid action".to_string(),
                                    ))
                                    .await;
                            }
                        }
                    }
                    _ => {}
                }
            }
            outcome = outcome_rx.recv() => {
                // The channel never closes while this loop holds a sender.
                let Some(outcome) = outcome else {
                    return;
                };
                match outcome {
                    Outcome::Generation(result) => {
                        form.resolve_generation(result)
                    }
                    Outcome::Analysis(result) => {
                        form.resolve_analysis(result)
                    }
                }
                send_snapshot(&mut sender, &form).await;
            }
        }
    }
}

fn apply_action(
    action: Action,
    form: &mut FormState,
    state: &ApiState,
    outcome_tx: &mpsc::Sender<Outcome>,
) {
    match action {
        Action::SetField { field, value } => match field {
            Field::ProductName => form.product_name = value,
            Field::TargetAudience => form.target_audience = value,
            Field::Keywords => form.keywords = value,
            Field::CompetitorUrl => form.competitor_url = value,
        },
        Action::SetTone { tone } => form.tone = tone,
        Action::SetLanguage { language } => form.language = language,
        Action::Generate => {
            if !form.begin_generation() {
                return;
            }

            let request = GenerateAdCopyRequest {
                product_name: form.product_name.clone(),
                target_audience: form.target_audience.clone(),
                keywords: form.keywords.clone(),
                tone: form.tone,
                language: form.language,
            };
            let agent = CopywriterAgent::new(state.gemini.clone());
            let tx = outcome_tx.clone();
            tokio::spawn(async move {
                let result = agent.prompt(request).await.map_err(|e| {
                    error!(task = "generate ad copy", error = format!("{:?}", e));
                    user_message("502-001")
                });
                let _ = tx.send(Outcome::Generation(result)).await;
            });
        }
        Action::Analyze => {
            if !form.begin_analysis() {
                return;
            }

            let url = normalize_url(form.competitor_url.trim());
            let agent = AnalystAgent::new(state.gemini.clone());
            let tx = outcome_tx.clone();
            tokio::spawn(async move {
                let result = agent.prompt(url).await.map_err(|e| {
                    error!(task = "analyze website", error = format!("{:?}", e));
                    user_message("502-002")
                });
                let _ = tx.send(Outcome::Analysis(result)).await;
            });
        }
    }
}

async fn send_snapshot(
    sender: &mut SplitSink<WebSocket, Message>,
    form: &FormState,
) {
    let snapshot =
        serde_json::to_string(&Snapshot::from(form)).unwrap();
    let _ = sender.send(Message::Text(snapshot)).await;
}
