// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resource name templates.
//!
//! Google Cloud APIs address resources with hierarchical names such as
//! `projects/my-project/locations/us/dataPolicies/my-policy`. The samples
//! build these names from the identifiers given on the command line, and
//! parse them back to print short identifiers in listings.
//!
//! Templates use the same syntax as the API definitions: literal segments,
//! `{variable}` for a single segment, and a trailing `{variable=**}` for a
//! variable that may span several segments (e.g. nested folders).

/// Errors building or parsing a resource name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("the template {template} expects {expected} values, got {got}")]
    Arity {
        template: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("the value for `{variable}` in {template} cannot be empty")]
    Empty {
        template: &'static str,
        variable: &'static str,
    },
    #[error("the value for `{variable}` in {template} cannot contain `/`, got {value:?}")]
    Slash {
        template: &'static str,
        variable: &'static str,
        value: String,
    },
    #[error("{name:?} does not match the template {template}")]
    Mismatch { template: &'static str, name: String },
}

type Result<T> = std::result::Result<T, NameError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Variable { name: &'static str, multi: bool },
}

impl Segment {
    fn new(s: &'static str) -> Self {
        match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            None => Self::Literal(s),
            Some(v) => match v.strip_suffix("=**") {
                Some(name) => Self::Variable { name, multi: true },
                None => Self::Variable {
                    name: v,
                    multi: false,
                },
            },
        }
    }
}

/// A resource name template, such as `projects/{project}/secrets/{secret}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    fn segments(&self) -> impl Iterator<Item = Segment> {
        self.0.split('/').map(Segment::new)
    }

    /// The variable names, in the order [expand][Self::expand] consumes them.
    pub fn variables(&self) -> Vec<&'static str> {
        self.segments()
            .filter_map(|s| match s {
                Segment::Variable { name, .. } => Some(name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitutes `values` into the template.
    ///
    /// # Example
    /// ```
    /// # use cloud_samples::names::SECRET;
    /// let name = SECRET.expand(&["my-project", "my-secret"])?;
    /// assert_eq!(name, "projects/my-project/secrets/my-secret");
    /// # Ok::<(), cloud_samples::names::NameError>(())
    /// ```
    pub fn expand(&self, values: &[&str]) -> Result<String> {
        let expected = self.variables().len();
        if values.len() != expected {
            return Err(NameError::Arity {
                template: self.0,
                expected,
                got: values.len(),
            });
        }
        let mut values = values.iter();
        let mut parts = Vec::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(l) => parts.push(l),
                Segment::Variable { name, multi } => {
                    // The arity check above guarantees a value for each variable.
                    let value = values.next().copied().unwrap_or_default();
                    if value.is_empty() {
                        return Err(NameError::Empty {
                            template: self.0,
                            variable: name,
                        });
                    }
                    if !multi && value.contains('/') {
                        return Err(NameError::Slash {
                            template: self.0,
                            variable: name,
                            value: value.to_string(),
                        });
                    }
                    parts.push(value);
                }
            }
        }
        Ok(parts.join("/"))
    }

    /// Extracts the variable values from `name`.
    pub fn parse<'a>(&self, name: &'a str) -> Result<Vec<&'a str>> {
        let mismatch = || NameError::Mismatch {
            template: self.0,
            name: name.to_string(),
        };
        let mut values = Vec::new();
        let mut rest = Some(name);
        for segment in self.segments() {
            let current = rest.ok_or_else(mismatch)?;
            let (head, tail) = match segment {
                Segment::Variable { multi: true, .. } => (current, None),
                _ => match current.split_once('/') {
                    Some((h, t)) => (h, Some(t)),
                    None => (current, None),
                },
            };
            match segment {
                Segment::Literal(l) if l == head => {}
                Segment::Literal(_) => return Err(mismatch()),
                Segment::Variable { .. } if head.is_empty() => return Err(mismatch()),
                Segment::Variable { .. } => values.push(head),
            }
            rest = tail;
        }
        match rest {
            None => Ok(values),
            Some(_) => Err(mismatch()),
        }
    }

    /// Returns the last variable value in `name`, or `name` itself if it does
    /// not match the template.
    ///
    /// Listings use this to print short identifiers.
    pub fn short_id<'a>(&self, name: &'a str) -> &'a str {
        self.parse(name)
            .ok()
            .and_then(|v| v.last().copied())
            .unwrap_or(name)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PROJECT: PathTemplate = PathTemplate::new("projects/{project}");
pub const LOCATION: PathTemplate = PathTemplate::new("projects/{project}/locations/{location}");

pub const SECRET: PathTemplate = PathTemplate::new("projects/{project}/secrets/{secret}");
pub const SECRET_VERSION: PathTemplate =
    PathTemplate::new("projects/{project}/secrets/{secret}/versions/{version}");

pub const DATA_POLICY: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/dataPolicies/{data_policy}");
pub const POLICY_TAG: PathTemplate = PathTemplate::new(
    "projects/{project}/locations/{location}/taxonomies/{taxonomy}/policyTags/{policy_tag}",
);

pub const CLUSTER: PathTemplate =
    PathTemplate::new("projects/{project}/regions/{region}/clusters/{cluster}");

pub const INSPECT_TEMPLATE: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/inspectTemplates/{template}");

pub const PROCESSOR: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/processors/{processor}");

pub const TRIGGER: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/triggers/{trigger}");
pub const PROVIDER: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/providers/{provider}");

pub const GROUP: PathTemplate = PathTemplate::new("projects/{project}/groups/{group}");
pub const ALERT_POLICY: PathTemplate =
    PathTemplate::new("projects/{project}/alertPolicies/{alert_policy}");

pub const BRANCH: PathTemplate = PathTemplate::new(
    "projects/{project}/locations/{location}/catalogs/{catalog}/branches/{branch}",
);
pub const PRODUCT: PathTemplate = PathTemplate::new(
    "projects/{project}/locations/{location}/catalogs/{catalog}/branches/{branch}/products/{product}",
);

pub const RECOGNIZER: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/recognizers/{recognizer}");

/// Cloud Storage names use `_` for the project, bucket names are global.
pub const BUCKET: PathTemplate = PathTemplate::new("projects/{project}/buckets/{bucket}");
pub const FOLDER: PathTemplate =
    PathTemplate::new("projects/{project}/buckets/{bucket}/folders/{folder=**}");
pub const MANAGED_FOLDER: PathTemplate =
    PathTemplate::new("projects/{project}/buckets/{bucket}/managedFolders/{managed_folder=**}");

pub const GLOSSARY: PathTemplate =
    PathTemplate::new("projects/{project}/locations/{location}/glossaries/{glossary}");

/// Cloud Storage control plane names always use the `_` project.
pub fn bucket(bucket_id: &str) -> Result<String> {
    BUCKET.expand(&["_", bucket_id])
}
