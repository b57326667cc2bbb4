use rolecat_definitions::Result;

/// Conversion from a user-authored source into a validated value
pub trait Build<T, P> {
    fn build(self, params: &P) -> Result<T>;
}

impl<T, P, S: Build<T, P>> Build<Option<T>, P> for Option<S> {
    fn build(self, params: &P) -> Result<Option<T>> {
        self.map(|s| s.build(params)).transpose()
    }
}

/// Builds every element in order, stopping at the first failure.
impl<T, P, S: Build<T, P>> Build<Vec<T>, P> for Vec<S> {
    fn build(self, params: &P) -> Result<Vec<T>> {
        self.into_iter().map(|s| s.build(params)).collect()
    }
}
