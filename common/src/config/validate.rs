/// Checks a deserialized config for values the game cannot run with.
/// The message is wrapped into `ConfigError::Validation` by the caller.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
