// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use crate::config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to the config file.
///
/// Other settings in the file are preserved. The locale is switched even
/// when the file cannot be written.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    i18n.set_locale(locale.clone());

    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.language = Some(locale.to_string());
    config::save_with_override(&cfg, config_dir)
}
