// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// One aggregate per subdirectory. Each aggregate owns its value objects,
// commands, errors and service, completely separate from the HTTP and
// persistence infrastructure.
//
// ============================================================================

pub mod order;
