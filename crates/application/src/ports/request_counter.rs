pub trait RequestCounter: Send + Sync {
    /// Record one answered request for the listener identified by `server`.
    fn increment(&self, server: &str);
}
