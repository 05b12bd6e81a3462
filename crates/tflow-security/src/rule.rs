//! Compiled secret rules and their mask strategies

use regex::{Captures, Regex};
use tflow_core::patterns::{MASK, MaskStrategy, SecretRuleDef};
use tflow_core::{Detection, Error, Result, Severity};

/// A secret rule ready to run against a line
#[derive(Debug, Clone)]
pub struct SecretRule {
    pub name: &'static str,
    pub label: &'static str,
    pub severity: Severity,
    pub strategy: MaskStrategy,
    regex: Regex,
}

/// Replacement text plus the redacted preview for one match
struct Masked {
    replacement: String,
    preview: String,
}

impl SecretRule {
    pub fn compile(def: &SecretRuleDef) -> Result<Self> {
        let regex = Regex::new(def.pattern).map_err(|source| Error::InvalidPattern {
            rule: def.name.to_string(),
            source,
        })?;

        Ok(Self {
            name: def.name,
            label: def.label,
            severity: def.severity,
            strategy: def.strategy,
            regex,
        })
    }

    /// Mask every match in `text`.
    ///
    /// All-or-nothing: if any match cannot be masked the whole rule fails and the
    /// caller keeps its input.
    pub fn apply(&self, text: &str, line: usize) -> Result<(String, Vec<Detection>)> {
        let mut output = String::with_capacity(text.len());
        let mut detections = Vec::new();
        let mut last = 0;

        for caps in self.regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let Some(masked) = self.mask(&caps)? else {
                continue;
            };

            output.push_str(&text[last..whole.start()]);
            output.push_str(&masked.replacement);
            last = whole.end();

            detections.push(Detection {
                kind: self.label.to_string(),
                pattern: masked.preview,
                line,
                masked: masked.replacement,
                severity: self.severity,
            });
        }

        output.push_str(&text[last..]);
        Ok((output, detections))
    }

    /// `None` when the match is already a placeholder
    fn mask(&self, caps: &Captures<'_>) -> Result<Option<Masked>> {
        match self.strategy {
            MaskStrategy::KeyAssignment | MaskStrategy::KnownShape => {
                let key = self.group(caps, 1)?;
                let value = self.group(caps, 2)?;
                if is_placeholder(value) {
                    return Ok(None);
                }

                let preview = if self.strategy == MaskStrategy::KnownShape {
                    let prefix: String = value.chars().take(4).collect();
                    format!("{key}={prefix}...")
                } else {
                    format!("{key}=***")
                };

                Ok(Some(Masked {
                    replacement: format!("{key}={MASK}"),
                    preview,
                }))
            }
            MaskStrategy::ConnectionString => {
                let matched = self.group(caps, 0)?;
                let (scheme, rest) = matched
                    .split_once("://")
                    .ok_or_else(|| self.failure("no scheme separator in match"))?;
                let (user, after_user) = rest
                    .split_once(':')
                    .ok_or_else(|| self.failure("no user/password separator in match"))?;
                let (password, host) = after_user
                    .split_once('@')
                    .ok_or_else(|| self.failure("no host separator in match"))?;

                if is_placeholder(user) && is_placeholder(password) {
                    return Ok(None);
                }

                Ok(Some(Masked {
                    replacement: format!("{scheme}://***:***@{host}"),
                    preview: format!("{scheme}://***:***@..."),
                }))
            }
            MaskStrategy::PrefixedToken => {
                let matched = self.group(caps, 0)?;
                let prefix = matched.split('_').next().unwrap_or_default();

                Ok(Some(Masked {
                    replacement: MASK.to_string(),
                    preview: format!("{prefix}_***"),
                }))
            }
        }
    }

    fn group<'t>(&self, caps: &Captures<'t>, index: usize) -> Result<&'t str> {
        caps.get(index)
            .map(|m| m.as_str())
            .ok_or_else(|| self.failure(&format!("pattern has no capture group {index}")))
    }

    fn failure(&self, reason: &str) -> Error {
        Error::MaskRule {
            rule: self.name.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn is_placeholder(value: &str) -> bool {
    value.starts_with("***")
}
