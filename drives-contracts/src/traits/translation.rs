// SPDX-License-Identifier: GPL-3.0-only

pub trait Translator: Send + Sync {
    fn translate(&self, domain: &str, msgid: &str) -> String;
}

/// Returns message ids untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, _domain: &str, msgid: &str) -> String {
        msgid.to_string()
    }
}
