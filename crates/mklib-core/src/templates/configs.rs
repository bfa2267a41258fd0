//! Tooling configuration for the generated project (tsup, prettier, tsc)

use super::format::to_tab_json;
use anyhow::Result;
use serde_json::{json, Value};

pub fn tsup() -> Value {
    json!({
        "entry": ["src/index.ts"],
        "format": ["esm", "cjs"],
        "dts": true,
        "splitting": true,
        "treeshake": true,
        "clean": true
    })
}

pub fn prettier() -> Value {
    json!({
        "singleQuote": true,
        "semi": false,
        "printWidth": 100,
        "trailingComma": "all",
        "bracketSpacing": true,
        "useTabs": true,
        "quoteProps": "consistent"
    })
}

pub fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ESNext",
            "lib": ["ESNext", "DOM"],
            "module": "ESNext",
            "moduleResolution": "bundler",
            "jsx": "react-jsx",
            "strict": true,
            "skipLibCheck": true,
            "noEmit": true
        },
        "include": ["src"],
        "exclude": ["node_modules", "dist"]
    })
}

/// tsup.config.ts wrapping [`tsup`] in `defineConfig`
pub fn tsup_config_source() -> Result<String> {
    Ok(format!(
        "import {{ defineConfig }} from 'tsup'\n\nexport default defineConfig({})",
        to_tab_json(&tsup())?
    ))
}
