//! Single-flight cache for the generated key pair
//!
//! One cache instance holds at most one encoded key pair. Concurrent
//! callers of [`KeygenCache::get_or_generate`] share a single in-flight
//! generation: the async mutex is held across the generation await, so a
//! second trigger waits and then observes the cached result instead of
//! starting a parallel generation.

use tokio::sync::Mutex;
use tokio::task;

use super::{EncodedKeyPair, KeyPair};
use crate::error::{DevkitError, Result};

pub struct KeygenCache {
    slot: Mutex<Option<EncodedKeyPair>>,
}

impl KeygenCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached key pair, generating it on first use
    pub async fn get_or_generate(&self) -> Result<EncodedKeyPair> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            return Ok(cached.clone());
        }

        let encoded = generate_encoded().await?;
        *slot = Some(encoded.clone());
        Ok(encoded)
    }

    /// Discard the cached key pair and generate a fresh one
    pub async fn regenerate(&self) -> Result<EncodedKeyPair> {
        let mut slot = self.slot.lock().await;

        let encoded = generate_encoded().await?;
        *slot = Some(encoded.clone());
        Ok(encoded)
    }
}

impl Default for KeygenCache {
    fn default() -> Self {
        Self::new()
    }
}

async fn generate_encoded() -> Result<EncodedKeyPair> {
    task::spawn_blocking(|| KeyPair::generate().map(|keypair| keypair.encode()))
        .await
        .map_err(|e| DevkitError::KeyGenerationFailed(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_get_or_generate_caches_result() {
        let cache = KeygenCache::new();

        let first = cache.get_or_generate().await.unwrap();
        let second = cache.get_or_generate().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_triggers_share_one_generation() {
        let cache = Arc::new(KeygenCache::new());

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.get_or_generate().await })
            })
            .collect();

        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.unwrap().unwrap());
        }

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_regenerate_replaces_cached_pair() {
        let cache = KeygenCache::new();

        let first = cache.get_or_generate().await.unwrap();
        let second = cache.regenerate().await.unwrap();
        assert_ne!(first, second);

        // The replacement is now what the cache serves
        let third = cache.get_or_generate().await.unwrap();
        assert_eq!(second, third);
    }
}
