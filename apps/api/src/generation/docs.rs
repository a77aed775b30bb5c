//! Technical documentation template fill.

use serde::{Deserialize, Serialize};

use crate::generation::options::{DocLanguage, DocStyle, DocType};

/// Section names reported for every document, whatever the options.
pub const DOC_SECTIONS: [&str; 5] = ["Overview", "Installation", "Usage", "Examples", "Contributing"];

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocsRequest {
    #[serde(default)]
    pub doc_type: DocType,
    #[serde(default)]
    pub language: DocLanguage,
    pub code_input: String,
    #[serde(default)]
    pub style: DocStyle,
    #[serde(default = "default_true")]
    pub include_examples: bool,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl DocsRequest {
    pub fn new(code_input: impl Into<String>) -> Self {
        Self {
            doc_type: DocType::default(),
            language: DocLanguage::default(),
            code_input: code_input.into(),
            style: DocStyle::default(),
            include_examples: true,
            project_name: None,
            version: None,
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnicalDoc {
    pub title: String,
    pub content: String,
    pub doc_type: DocType,
    pub language: DocLanguage,
    pub word_count: usize,
    pub sections: Vec<&'static str>,
}

fn examples_block(lang: &str) -> String {
    format!(
        r#"
### Examples

```{lang}
// Example usage
const result = exampleFunction();
console.log(result);
```

### Parameters

| Parameter | Type | Description | Required |
|-----------|------|-------------|----------|
| input | string | The input parameter | Yes |
| options | object | Configuration options | No |

### Return Value

Returns a processed result based on the input parameters.
"#
    )
}

/// Fills the documentation template. Deterministic: no random parts.
pub fn generate_docs(request: &DocsRequest) -> TechnicalDoc {
    let title = match request.project_name() {
        Some(name) => format!("{} - {name}", request.doc_type.heading()),
        None => request.doc_type.heading().to_string(),
    };
    let lang = request.language.as_str();
    let version = request
        .version()
        .map(|v| format!("**Version:** {v}\n"))
        .unwrap_or_default();
    let code = request.code_input.trim_end();
    let examples = if request.include_examples {
        examples_block(lang)
    } else {
        String::new()
    };

    let content = format!(
        r#"# {title}

{version}

## Overview

This documentation provides comprehensive information about the {lang} implementation provided.

## Code Analysis

The following {lang} code has been analyzed:

```{lang}
{code}
```

## Documentation

### Functions/Methods

Based on the code analysis, the following functions and methods have been identified:

{examples}

### Error Handling

The implementation includes proper error handling for common scenarios:

- Invalid input parameters
- Network connectivity issues
- Authentication failures

### Best Practices

When using this implementation:

1. **Validation**: Always validate input parameters
2. **Error Handling**: Implement proper error handling
3. **Testing**: Include comprehensive unit tests
4. **Documentation**: Keep documentation up to date

## Installation

```bash
npm install your-package-name
```

## Usage

```{lang}
import {{ yourFunction }} from 'your-package-name';

const result = yourFunction(parameters);
```

## Contributing

Please read our contributing guidelines before submitting pull requests.

## License

This project is licensed under the MIT License.

---

*Documentation generated automatically with AI assistance.*"#
    );

    TechnicalDoc {
        word_count: content.split(' ').count(),
        sections: DOC_SECTIONS.to_vec(),
        doc_type: request.doc_type,
        language: request.language,
        title,
        content,
    }
}
