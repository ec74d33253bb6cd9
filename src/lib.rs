//! Open Props Language Server implementation.

use std::sync::OnceLock;

use log::{debug, info, warn};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

mod document;
mod logging;
mod lsp;
pub(crate) mod settings;
mod variables;

pub use document::{DocumentError, DocumentStore, LineIndex, TextDocument};
pub use logging::init_logger;
pub use lsp::scan;
pub use lsp::{completion_at_position, hover_at_position};
pub use settings::{discover_settings, load_settings, read_settings, Settings, SettingsError};
pub use variables::{VariableTable, OPEN_PROPS};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    variables: OnceLock<VariableTable>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            variables: OnceLock::new(),
        }
    }

    /// The variable table, falling back to plain Open Props if `initialize`
    /// has not built one.
    fn variables(&self) -> &VariableTable {
        self.variables.get_or_init(VariableTable::open_props)
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        // Extract workspace root from params
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        let table = match workspace_root {
            Some(root) => {
                let (settings, settings_dir) = settings::discover_settings(&root);
                debug!("settings resolved from {}", settings_dir.display());
                VariableTable::with_settings(&settings)
            }
            None => VariableTable::open_props(),
        };
        info!("serving {} variables", table.len());
        if self.variables.set(table).is_err() {
            warn!("variable table already in use, workspace settings ignored");
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::INCREMENTAL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Open Props language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!("opened {}", params.text_document.uri);
        self.documents.open(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        if let Err(e) = self.documents.apply_changes(
            &params.text_document.uri,
            params.content_changes,
            params.text_document.version,
        ) {
            warn!("ignoring change: {}", e);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("closed {}", params.text_document.uri);
        self.documents.close(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(line) = self.documents.line(uri, position) else {
            return Ok(None);
        };

        Ok(lsp::hover_at_position(self.variables(), &line, position))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(line) = self.documents.line(uri, position) else {
            debug!("[completion] no document found for {}", uri);
            return Ok(None);
        };

        Ok(lsp::completion_at_position(
            self.variables(),
            &line,
            position,
        ))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[allow(deprecated)]
    fn params_for(dir: &std::path::Path) -> InitializeParams {
        InitializeParams {
            root_uri: Some(Url::from_directory_path(dir).unwrap()),
            ..Default::default()
        }
    }

    fn write_settings(dir: &std::path::Path) {
        fs::write(
            dir.join("open-props.toml"),
            r##"
exclude = ["--gray-0"]

[variables]
"--brand" = "#ff3e00"
"##,
        )
        .unwrap();
    }

    #[test]
    fn service_can_be_created() {
        let (_service, _socket) = create_service();
    }

    #[test]
    fn variables_default_to_open_props() {
        let (service, _socket) = create_service();
        assert_eq!(service.inner().variables().len(), OPEN_PROPS.len());
    }

    #[tokio::test]
    async fn initialize_advertises_capabilities_and_loads_settings() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path());

        let (service, _socket) = create_service();
        let backend = service.inner();
        let result = backend.initialize(params_for(dir.path())).await.unwrap();

        let capabilities = result.capabilities;
        assert_eq!(
            capabilities.text_document_sync,
            Some(TextDocumentSyncCapability::Kind(
                TextDocumentSyncKind::INCREMENTAL
            ))
        );
        assert_eq!(
            capabilities.hover_provider,
            Some(HoverProviderCapability::Simple(true))
        );
        assert_eq!(
            capabilities
                .completion_provider
                .and_then(|options| options.resolve_provider),
            Some(false)
        );
        assert_eq!(
            result.server_info.map(|info| info.name).as_deref(),
            Some("open-props-lsp")
        );

        let variables = backend.variables();
        assert_eq!(variables.get("--brand"), Some("#ff3e00"));
        assert!(variables.get("--gray-0").is_none());
        assert_eq!(variables.len(), OPEN_PROPS.len());
    }

    #[tokio::test]
    async fn initialize_without_settings_serves_open_props() {
        let dir = tempfile::tempdir().unwrap();

        let (service, _socket) = create_service();
        let backend = service.inner();
        backend.initialize(params_for(dir.path())).await.unwrap();

        assert_eq!(backend.variables().len(), OPEN_PROPS.len());
        assert!(backend.variables().get("--brand").is_none());
    }

    #[tokio::test]
    async fn initialize_after_first_request_keeps_existing_table() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path());

        let (service, _socket) = create_service();
        let backend = service.inner();
        assert_eq!(backend.variables().len(), OPEN_PROPS.len());

        backend.initialize(params_for(dir.path())).await.unwrap();
        assert!(backend.variables().get("--brand").is_none());
        assert_eq!(backend.variables().get("--gray-0"), Some("#f8f9fa"));
    }
}
