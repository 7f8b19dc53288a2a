use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(
    DataSourceError,
    "Error reading data source '{path}'.",
    { path: &str }
);

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(
    SchemaError,
    "Data source '{file}' does not match its schema: column '{column}' {problem}.",
    { file: &str, column: &str, problem: &str }
);
define_client_error!(InvalidConfig, "Invalid dashboard configuration (invalid RON format).");

// Export-related.
define_internal_error!(
    ExportError,
    "Failed to export '{target}': {details}.",
    { target: &str, details: &str }
);
