/// Status-bar line protocol and report rendering
pub mod formatter;

/// GitHub GraphQL client, query construction and response types
pub mod github;

/// Configuration loading and the involvement aggregation service
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;
