#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_server::run().await
}
