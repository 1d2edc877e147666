pub mod analyst;
pub mod copywriter;

pub trait Agent {
    type Input;
    type Item;
    fn prompt(
        self,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Self::Item> + Send;
}
