use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use sympred::app_dirs::CONFIG_HOME_ENV;
use sympred::config::BACKEND_URL_ENV;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points the config home at a temp dir and clears the backend URL override
/// for the lifetime of the guard.
pub struct SympredEnvGuard {
    previous_home: Option<String>,
    previous_backend: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl SympredEnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous_home = std::env::var(CONFIG_HOME_ENV).ok();
        let previous_backend = std::env::var(BACKEND_URL_ENV).ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, path);
            std::env::remove_var(BACKEND_URL_ENV);
        }
        Self {
            previous_home,
            previous_backend,
            _lock: lock,
        }
    }

    pub fn set_backend_url(&self, url: &str) {
        // SAFETY: the guard holds the global env lock.
        unsafe {
            std::env::set_var(BACKEND_URL_ENV, url);
        }
    }
}

fn restore(key: &str, value: Option<String>) {
    // SAFETY: called from Drop while the global env lock is still held.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

impl Drop for SympredEnvGuard {
    fn drop(&mut self) {
        restore(CONFIG_HOME_ENV, self.previous_home.take());
        restore(BACKEND_URL_ENV, self.previous_backend.take());
    }
}
