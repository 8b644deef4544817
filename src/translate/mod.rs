// src/translate/mod.rs
//! Chinese → English translation of the store and the root pages.
//!
//! The backend is picked once from configuration and handed in as a
//! `Translate` object. Jobs never see HTTP; a failed call degrades to the
//! untranslated text so a batch always completes.

pub mod azure;
pub mod deepl;
pub mod html;
pub mod json;
pub mod phrases;

use crate::config::consts::TRANSLATE_BATCH;
use crate::config::Backend;
use crate::core::net::{self, NetError};

pub trait Translate {
    /// Translate every text. The result always has the same length as `texts`.
    fn translate(&self, texts: &[String]) -> Vec<String>;
}

/// Make `out` exactly as long as `originals`, filling from the originals.
pub fn align_to(mut out: Vec<String>, originals: &[String]) -> Vec<String> {
    out.truncate(originals.len());
    let have = out.len();
    out.extend(originals[have..].iter().cloned());
    out
}

/// Calls DeepL or Azure over HTTPS, at most `TRANSLATE_BATCH` texts per request.
pub struct ApiTranslator {
    backend: Backend,
    agent: ureq::Agent,
}

impl ApiTranslator {
    pub fn new(backend: Backend) -> Self {
        Self { backend, agent: net::agent() }
    }

    pub fn backend_name(&self) -> &'static str { self.backend.name() }

    fn call(&self, batch: &[String]) -> Result<Vec<String>, NetError> {
        match &self.backend {
            Backend::DeepL { api_key } => deepl::translate(&self.agent, api_key, batch),
            Backend::Azure { api_key, endpoint } => azure::translate(&self.agent, api_key, endpoint, batch),
        }
    }
}

/// Send `texts` through `call` in chunks of at most `TRANSLATE_BATCH`.
/// A failed chunk keeps its originals; the other chunks still go out.
pub fn translate_batched<F>(backend: &str, texts: &[String], call: F) -> Vec<String>
where
    F: Fn(&[String]) -> Result<Vec<String>, NetError>,
{
    let mut out = Vec::with_capacity(texts.len());
    for batch in texts.chunks(TRANSLATE_BATCH) {
        match call(batch) {
            Ok(got) => {
                if got.len() != batch.len() {
                    logw!("{backend}: got {} translations for {} texts", got.len(), batch.len());
                }
                out.extend(align_to(got, batch));
            }
            Err(e) => {
                loge!("{backend} error: {e}");
                out.extend(batch.iter().cloned());
            }
        }
    }
    out
}

impl Translate for ApiTranslator {
    fn translate(&self, texts: &[String]) -> Vec<String> {
        translate_batched(self.backend_name(), texts, |batch| self.call(batch))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Translate;
    use std::cell::RefCell;

    /// Deterministic stand-in: wraps each text as `EN(<text>)` and records calls.
    #[derive(Default)]
    pub struct FakeTranslator {
        pub calls: RefCell<Vec<Vec<String>>>,
    }

    impl Translate for FakeTranslator {
        fn translate(&self, texts: &[String]) -> Vec<String> {
            self.calls.borrow_mut().push(texts.to_vec());
            texts.iter().map(|t| format!("EN({t})")).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> { v.iter().map(|s| s!(*s)).collect() }

    #[test]
    fn short_reply_is_padded_with_originals() {
        let orig = strings(&["a", "b", "c"]);
        assert_eq!(align_to(strings(&["A"]), &orig), strings(&["A", "b", "c"]));
        assert_eq!(align_to(strings(&["A", "B", "C", "D"]), &orig), strings(&["A", "B", "C"]));
    }

    #[test]
    fn unreachable_backend_returns_input() {
        let tr = ApiTranslator::new(Backend::Azure {
            api_key: s!("k"),
            endpoint: s!("not a url"),
        });
        let texts = strings(&["你好", "世界"]);
        assert_eq!(tr.translate(&texts), texts);
    }

    #[test]
    fn failed_chunk_keeps_originals_while_others_translate() {
        use std::cell::RefCell;
        use url::Url;

        let texts: Vec<String> = (0..120).map(|i| format!("文{i}")).collect();
        let sizes = RefCell::new(Vec::new());
        let out = translate_batched("test", &texts, |batch| {
            let n = {
                let mut sizes = sizes.borrow_mut();
                sizes.push(batch.len());
                sizes.len()
            };
            if n == 2 {
                return Err(NetError::from(Url::parse("not a url").unwrap_err()));
            }
            Ok(batch.iter().map(|t| format!("EN({t})")).collect())
        });

        assert_eq!(*sizes.borrow(), vec![50, 50, 20]);
        assert_eq!(out.len(), 120);
        assert_eq!(out[0], "EN(文0)");
        assert_eq!(out[49], "EN(文49)");
        assert_eq!(out[50], "文50");
        assert_eq!(out[99], "文99");
        assert_eq!(out[100], "EN(文100)");
        assert_eq!(out[119], "EN(文119)");
    }
}
