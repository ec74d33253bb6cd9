use open_props_lsp::{create_service, init_logger};
use tower_lsp::Server;

#[tokio::main]
async fn main() {
    if let Err(e) = init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}
