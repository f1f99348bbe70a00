pub mod run;

use screening::ModelStore;

/// Immutable application context handed to every screen.
///
/// Owns the loaded models for the lifetime of the process; screens borrow it
/// and nothing mutates it after startup.
pub struct AppContext {
    pub store: ModelStore,
}
