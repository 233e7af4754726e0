use std::collections::BTreeMap;

/// Irregular historical aliases. Each family lists dotted name suffixes that
/// refer to the same logical property; kebab-case forms are derived.
const ALIAS_FAMILIES: &[&[&str]] =
    &[&["initContainer.imageName", "initContainer.containerName"]];

/// Resolves a deployment property against the naming conventions a property
/// bag may use: the canonical dotted camelCase name, its kebab-case form,
/// irregular historical aliases, and the upper-snake-case environment
/// variable form. An unset property is `None`, never an error.
#[must_use]
pub fn deployment_property_value<'a>(
    properties: &'a BTreeMap<String, String>,
    name: &str,
) -> Option<&'a str> {
    let name = PropertyName::new(name);

    for candidate in name.candidates() {
        if let Some(value) = properties.get(&candidate) {
            if candidate != name.0 {
                tracing::debug!(
                    property = %name,
                    alias = %candidate,
                    "deployment property resolved via alias"
                );
            }
            return Some(value.as_str());
        }
    }

    None
}

/*
 * ============================================================================
 * Property Name
 * ============================================================================
 */
#[derive(Debug, PartialEq, Eq)]
pub struct PropertyName<'a>(&'a str);

impl<'a> PropertyName<'a> {
    #[must_use]
    pub fn new(value: &'a str) -> Self {
        Self(value)
    }

    /// Lookup candidates in precedence order: the name as given, its
    /// kebab-case form, irregular aliases, then the environment variable
    /// form. The most specific key wins when several are present.
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        let mut candidates = vec![self.0.to_string()];

        let kebab = kebab_case(self.0);
        if kebab != self.0 {
            candidates.push(kebab);
        }

        for family in ALIAS_FAMILIES {
            let Some(prefix) = family
                .iter()
                .find_map(|member| strip_member_suffix(self.0, member))
            else {
                continue;
            };

            for member in *family {
                for alias in [
                    format!("{prefix}{member}"),
                    format!("{prefix}{}", kebab_case(member)),
                ] {
                    if !candidates.contains(&alias) {
                        candidates.push(alias);
                    }
                }
            }
        }

        candidates.push(environment_variable(self.0));
        candidates
    }
}

impl std::fmt::Display for PropertyName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strips `member`, in either its given or kebab-case form, from the end of
/// `name`. The boundary before the suffix must be a dot or the start.
fn strip_member_suffix<'a>(name: &'a str, member: &str) -> Option<&'a str> {
    let kebab = kebab_case(member);
    let prefix = name
        .strip_suffix(member)
        .or_else(|| name.strip_suffix(kebab.as_str()))?;

    (prefix.is_empty() || prefix.ends_with('.')).then_some(prefix)
}

/// `podAnnotations` -> `pod-annotations`, leaving dots in place.
fn kebab_case(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len());
    let mut previous = None;

    for character in name.chars() {
        if character.is_ascii_uppercase() {
            if previous.is_some_and(char::is_alphanumeric) {
                kebab.push('-');
            }
            kebab.push(character.to_ascii_lowercase());
        } else {
            kebab.push(character);
        }
        previous = Some(character);
    }

    kebab
}

/// `spring.cloud.deployer.kubernetes.imagePullPolicy` ->
/// `SPRING_CLOUD_DEPLOYER_KUBERNETES_IMAGEPULLPOLICY`.
fn environment_variable(name: &str) -> String {
    name.chars()
        .filter(|character| *character != '-')
        .map(|character| {
            if character == '.' {
                '_'
            } else {
                character.to_ascii_uppercase()
            }
        })
        .collect()
}
