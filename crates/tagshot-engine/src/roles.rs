use std::collections::{BTreeMap, HashMap};

/// Looks up the display name of a role mention.
///
/// Called synchronously from inside the tokenizer, so implementations must be
/// an already-resolved mapping: no I/O, no blocking. A miss (or any internal
/// failure) is reported as `None` and the mention falls back to its id.
pub trait RoleResolver {
    fn resolve(&self, role_id: &str) -> Option<String>;
}

/// Resolver that knows no roles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoles;

impl RoleResolver for NoRoles {
    fn resolve(&self, _role_id: &str) -> Option<String> {
        None
    }
}

impl RoleResolver for HashMap<String, String> {
    fn resolve(&self, role_id: &str) -> Option<String> {
        self.get(role_id).cloned()
    }
}

impl RoleResolver for BTreeMap<String, String> {
    fn resolve(&self, role_id: &str) -> Option<String> {
        self.get(role_id).cloned()
    }
}

impl<T: RoleResolver + ?Sized> RoleResolver for &T {
    fn resolve(&self, role_id: &str) -> Option<String> {
        (**self).resolve(role_id)
    }
}

impl<T: RoleResolver + ?Sized> RoleResolver for Box<T> {
    fn resolve(&self, role_id: &str) -> Option<String> {
        (**self).resolve(role_id)
    }
}
