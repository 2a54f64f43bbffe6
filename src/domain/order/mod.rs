// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (ItemRequest, OrderItem, OrderStatus)
// - Commands (CreateOrder)
// - Errors (OrderError enum)
// - Aggregate (NewOrder / Order with total computation and validation)
// - Service (OrderService orchestration over the injected collaborators)
//
// Persistence, pricing, inventory and audit live behind traits outside this
// module; nothing in here touches a database or the network directly.
//
// ============================================================================

pub mod aggregate;
pub mod commands;
pub mod errors;
pub mod service;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use commands::*;
pub use errors::*;
pub use service::*;
pub use value_objects::*;
