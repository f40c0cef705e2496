use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that mutate the process environment.
fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`].
unsafe fn clear_facts_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("FACTS_MEMORY_STORE");
        std::env::remove_var("FACTS_BACKEND_URL");
        std::env::remove_var("FACTS_BACKEND_KEY_ENV");
        std::env::remove_var("FACTS_BACKEND_KEY");
        std::env::remove_var("FACTS_TABLE");
        std::env::remove_var("FACTS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("FACTS_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("SUPABASE_ANON_KEY");
    }
}

#[test]
fn from_env_defaults_with_backend() {
    let _guard = env_lock();
    unsafe {
        clear_facts_env();
        std::env::set_var("FACTS_BACKEND_URL", "https://project.supabase.co/");
        std::env::set_var("FACTS_BACKEND_KEY", "anon-key");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    let StoreConfig::Backend(backend) = cfg.store else {
        panic!("expected backend store");
    };
    assert_eq!(backend.base_url, "https://project.supabase.co");
    assert_eq!(backend.api_key, "anon-key");
    assert_eq!(backend.table, DEFAULT_TABLE);
    assert_eq!(
        backend.timeouts,
        BackendTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );

    unsafe { clear_facts_env() };
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_facts_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("FACTS_BACKEND_URL", "http://localhost:54321");
        std::env::set_var("FACTS_BACKEND_KEY_ENV", "SUPABASE_ANON_KEY");
        std::env::set_var("SUPABASE_ANON_KEY", "k");
        std::env::set_var("FACTS_TABLE", "facts_v2");
        std::env::set_var("FACTS_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("FACTS_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    let StoreConfig::Backend(backend) = cfg.store else {
        panic!("expected backend store");
    };
    assert_eq!(backend.api_key, "k");
    assert_eq!(backend.table, "facts_v2");
    assert_eq!(backend.timeouts, BackendTimeouts { request_secs: 30, connect_secs: 2 });

    unsafe { clear_facts_env() };
}

#[test]
fn from_env_memory_store_needs_no_backend() {
    let _guard = env_lock();
    unsafe {
        clear_facts_env();
        std::env::set_var("FACTS_MEMORY_STORE", "1");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.store, StoreConfig::Memory);

    unsafe { clear_facts_env() };
}

#[test]
fn from_env_missing_url_errors() {
    let _guard = env_lock();
    unsafe { clear_facts_env() };

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { ref var } if var == "FACTS_BACKEND_URL"));
}

#[test]
fn from_env_missing_key_names_key_var() {
    let _guard = env_lock();
    unsafe {
        clear_facts_env();
        std::env::set_var("FACTS_BACKEND_URL", "https://project.supabase.co");
        std::env::set_var("FACTS_BACKEND_KEY_ENV", "SUPABASE_ANON_KEY");
    }

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { ref var } if var == "SUPABASE_ANON_KEY"));

    unsafe { clear_facts_env() };
}

#[test]
fn from_env_rejects_bad_port_and_url() {
    let _guard = env_lock();
    unsafe {
        clear_facts_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("FACTS_MEMORY_STORE", "1");
    }
    assert!(matches!(Config::from_env(), Err(ConfigError::Parse(_))));

    unsafe {
        clear_facts_env();
        std::env::set_var("FACTS_BACKEND_URL", "project.supabase.co");
        std::env::set_var("FACTS_BACKEND_KEY", "k");
    }
    assert!(matches!(Config::from_env(), Err(ConfigError::Parse(_))));

    unsafe { clear_facts_env() };
}
