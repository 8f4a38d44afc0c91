pub mod upsert_file_builder;

use anyhow::Result;

#[allow(async_fn_in_trait)]
pub trait BuilderExecutor {
    type Output;
    type Error: Into<anyhow::Error>;

    async fn execute(self) -> Result<Self::Output, Self::Error>;
}
