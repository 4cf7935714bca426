use std::{collections::HashMap, env};

/// Action inputs and runner variables, captured once at start-up.
#[derive(Clone, Default)]
pub struct Inputs {
    vars: HashMap<String, String>,
}

impl Inputs {
    pub fn from_env() -> Self {
        env::vars().collect()
    }

    /// Reads `INPUT_<NAME>`; blank values count as absent.
    pub fn input(&self, name: &str) -> Option<String> {
        let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());

        self.env(&key)
    }

    pub fn boolean_input(&self, name: &str) -> bool {
        self.input(name)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }

    pub fn env(&self, name: &str) -> Option<String> {
        self.vars
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }
}

impl<K, V> FromIterator<(K, V)> for Inputs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Inputs {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
