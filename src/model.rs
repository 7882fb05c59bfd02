use crate::{
    error::CallError,
    method::{MethodCall, Verb},
    store::{Iter, Store},
    value::Value,
};

/// Result of a convention-dispatched call.
#[derive(Debug, PartialEq)]
pub enum CallOutcome<'model> {
    /// A get-call: the stored value, or `None` when the key is absent.
    Value(Option<&'model Value>),
    /// An isset-call: whether the key is present.
    Present(bool),
    /// A set-call stored its value.
    Stored,
    /// An unset-call ran, whether or not the key existed.
    Removed,
}

/// Property container behavior for types backed by a [`Store`].
///
/// Implementors supply the backing store and the raw `from_store`
/// constructor; everything else is provided. Construction goes through
/// [`Model::new`] or [`Model::with_entries`] so [`Model::after_construct`]
/// runs exactly once per instance.
pub trait Model: Sized {
    /// Wrap an existing store without running the construction hook.
    fn from_store(store: Store) -> Self;

    fn store(&self) -> &Store;

    fn store_mut(&mut self) -> &mut Store;

    /// Name identifying this model in dispatch errors. Defaults to the type
    /// name without its module path.
    fn model_name(&self) -> &str {
        let name = std::any::type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name)
    }

    /// Runs once at the end of [`Model::new`] and [`Model::with_entries`],
    /// after the store is populated. Default is a no-op.
    fn after_construct(&mut self) {}

    fn new() -> Self {
        Self::with_entries([])
    }

    /// Build a model pre-seeded with `entries`, kept in the order given.
    fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut model = Self::from_store(entries.into_iter().collect());
        model.after_construct();
        model
    }

    fn has(&self, key: &str) -> bool {
        self.store().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.store().get(key)
    }

    fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.store_mut().insert(key, value);
        self
    }

    /// No-op if the key is absent.
    fn remove(&mut self, key: &str) -> &mut Self {
        self.store_mut().remove(key);
        self
    }

    /// Iterate `(key, value)` pairs in insertion order. Restartable; each
    /// pass covers the whole store as of the start of the pass.
    fn iter(&self) -> Iter<'_> {
        self.store().iter()
    }

    /// Dispatch a method name against the `(get|set|isset|unset)<Identifier>`
    /// grammar, resolving the identifier to its snake_case key.
    ///
    /// Set-dispatch takes the value from the first positional argument and
    /// ignores the rest; calling it with no arguments is an error rather
    /// than a silent null store.
    fn call(&mut self, method: &str, args: Vec<Value>) -> Result<CallOutcome<'_>, CallError> {
        let parsed = match MethodCall::parse(method) {
            Some(parsed) => parsed,
            None => {
                return Err(CallError::MethodNotFound {
                    model: self.model_name().to_string(),
                    method: method.to_string(),
                })
            }
        };

        match parsed.verb {
            Verb::Get => Ok(CallOutcome::Value(self.store().get(&parsed.key))),
            Verb::IsSet => Ok(CallOutcome::Present(self.store().contains_key(&parsed.key))),
            Verb::Set => match args.into_iter().next() {
                Some(value) => {
                    self.store_mut().insert(parsed.key, value);
                    Ok(CallOutcome::Stored)
                }
                None => Err(CallError::MissingArgument {
                    model: self.model_name().to_string(),
                    method: method.to_string(),
                }),
            },
            Verb::Unset => {
                self.store_mut().remove(&parsed.key);
                Ok(CallOutcome::Removed)
            }
        }
    }
}

/// Ready-made model with no behavior beyond its stored properties.
#[derive(Debug, Default, Clone)]
pub struct DynamicModel {
    store: Store,
}

impl Model for DynamicModel {
    fn from_store(store: Store) -> Self {
        DynamicModel { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }

    fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

impl std::ops::Index<&str> for DynamicModel {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.store[key]
    }
}
