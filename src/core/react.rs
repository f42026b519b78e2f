//! React + Vite recipe
//!
//! Generated with `create vite --template react`, reshaped into
//! `app/`, `UI/` and `home/` feature folders, routed through
//! react-router, styled with Tailwind.

use crate::core::template::{TemplateFile, TemplateRecipe};

pub static RECIPE: TemplateRecipe = TemplateRecipe {
    generator_package: "vite@latest",
    generator_template: "react",
    source_dir: "src",
    removed_dirs: &["assets"],
    removed_files: &["App.css"],
    created_dirs: &[
        "app",
        "UI",
        "UI/Components",
        "UI/Navbar",
        "home",
        "home/Components",
        "home/store",
    ],
    files: FILES,
    extra_dependencies: &[
        "react-router-dom",
        "axios",
        "zustand",
        "tailwindcss",
        "@tailwindcss/vite",
    ],
};

const FILES: &[TemplateFile] = &[
    TemplateFile {
        key: "vite.config.js",
        path_from_src: "../vite.config.js",
        contents: include_str!("../../templates/react/vite.config.js"),
    },
    TemplateFile {
        key: "index.css",
        path_from_src: "index.css",
        contents: include_str!("../../templates/react/index.css"),
    },
    TemplateFile {
        key: "App.jsx",
        path_from_src: "App.jsx",
        contents: include_str!("../../templates/react/App.jsx"),
    },
    TemplateFile {
        key: "app.routes.jsx",
        path_from_src: "app/app.routes.jsx",
        contents: include_str!("../../templates/react/app/app.routes.jsx"),
    },
    TemplateFile {
        key: "AppContent.jsx",
        path_from_src: "app/AppContent.jsx",
        contents: include_str!("../../templates/react/app/AppContent.jsx"),
    },
    TemplateFile {
        key: "HomeLayout.jsx",
        path_from_src: "home/HomeLayout.jsx",
        contents: include_str!("../../templates/react/home/HomeLayout.jsx"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_files_with_unique_destinations() {
        assert_eq!(RECIPE.files.len(), 6);
        let paths: HashSet<_> = RECIPE.files.iter().map(|f| f.path_from_src).collect();
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn test_imports_point_at_written_files() {
        let by_key = |key: &str| RECIPE.files.iter().find(|f| f.key == key).unwrap();

        assert!(by_key("App.jsx").contents.contains("./app/AppContent.jsx"));
        assert!(by_key("AppContent.jsx").contents.contains("./app.routes.jsx"));
        assert_eq!(by_key("app.routes.jsx").path_from_src, "app/app.routes.jsx");
        assert!(by_key("app.routes.jsx")
            .contents
            .contains("../home/HomeLayout.jsx"));
    }

    #[test]
    fn test_vite_config_uses_tailwind_plugin() {
        let config = RECIPE.files[0];
        assert_eq!(config.path_from_src, "../vite.config.js");
        assert!(config.contents.contains("tailwindcss()"));
        assert!(RECIPE.extra_dependencies.contains(&"@tailwindcss/vite"));
    }

    #[test]
    fn test_file_text_is_kept_verbatim() {
        let by_key = |key: &str| RECIPE.files.iter().find(|f| f.key == key).unwrap();

        assert_eq!(by_key("index.css").contents, "@import 'tailwindcss';");
        assert!(by_key("app.routes.jsx")
            .contents
            .starts_with("import {Routes, Route} from 'react-router-dom';"));
        assert!(by_key("AppContent.jsx")
            .contents
            .contains("<main className=\"min-h-screen flex flex-col gap-2\" >"));
        for file in RECIPE.files {
            assert!(!file.contents.ends_with('\t'), "{} keeps trailing indent", file.key);
        }
    }

    #[test]
    fn test_created_dirs_cover_written_files() {
        for file in RECIPE.files {
            if let Some((dir, _)) = file.path_from_src.rsplit_once('/') {
                if dir != ".." {
                    assert!(RECIPE.created_dirs.contains(&dir), "{dir} not created");
                }
            }
        }
    }
}
