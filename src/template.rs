//! Text templates
//!
//! Templates are embedded in the binary at build time and rendered by plain
//! token substitution: `<key>` becomes the value, `<under:key>` becomes a run of
//! `=` as long as the value (a Markdown heading underline).

/// An embedded template and the file it renders to.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub file_name: &'static str,
    pub body: &'static str,
}

pub const LICENSE: Template = Template {
    file_name: "LICENSE",
    body: include_str!("../templates/license.txt"),
};

pub const README: Template = Template {
    file_name: "README.md",
    body: include_str!("../templates/readme.md"),
};

pub const TRAVIS: Template = Template {
    file_name: ".travis.yml",
    body: include_str!("../templates/travis.yml"),
};

impl Template {
    pub fn render<K: AsRef<str>, V: AsRef<str>>(&self, values: &[(K, V)]) -> String {
        render(self.body, values)
    }
}

/// Substitute every `<key>` and `<under:key>` token. Unknown tokens are kept.
///
/// Tokens are resolved in a single pass over the template, so substituted
/// values are never expanded again.
pub fn render<K: AsRef<str>, V: AsRef<str>>(template: &str, values: &[(K, V)]) -> String {
    let mut rest = template.trim();
    let mut text = String::with_capacity(rest.len());

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            rest = &rest[start..];
            break;
        };
        match resolve(&after[..end], values) {
            Some(replacement) => {
                text.push_str(&replacement);
                rest = &after[end + 1..];
            }
            None => {
                text.push('<');
                rest = after;
            }
        }
    }
    text.push_str(rest);
    text.push('\n');
    text
}

fn resolve<K: AsRef<str>, V: AsRef<str>>(token: &str, values: &[(K, V)]) -> Option<String> {
    let (key, underline) = match token.strip_prefix("under:") {
        Some(key) => (key, true),
        None => (token, false),
    };
    let (_, value) = values.iter().find(|(k, _)| k.as_ref() == key)?;
    let value = value.as_ref();
    if underline {
        Some("=".repeat(value.chars().count()))
    } else {
        Some(value.to_string())
    }
}
