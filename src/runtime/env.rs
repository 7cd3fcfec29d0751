use std::collections::HashMap;

/// Flat global variable scope.
#[derive(Debug, Default)]
pub(crate) struct Environment<'src> {
    entries: HashMap<&'src str, i64>,
}

impl<'src> Environment<'src> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, k: &str) -> Option<i64> {
        self.entries.get(k).copied()
    }

    pub fn insert(&mut self, k: &'src str, v: i64) {
        let _ = self.entries.insert(k, v);
    }
}

#[cfg(test)]
mod test {
    use super::Environment;

    #[test]
    fn insert_overwrites() {
        let mut env = Environment::new();
        assert_eq!(env.get("x"), None);

        env.insert("x", 1);
        env.insert("x", -4);
        assert_eq!(env.get("x"), Some(-4));
    }
}
