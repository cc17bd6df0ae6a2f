//! Contents of the individual starter files.

use serde_json::json;

use crate::spec::{Category, TechStack};

pub(super) const GITIGNORE: &str = "\
# Dependencies
node_modules/
__pycache__/
*.pyc
*.pyo
*.pyd
.Python
env/
venv/
.venv/

# Environment variables
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

# IDE files
.vscode/
.idea/
*.swp
*.swo

# OS files
.DS_Store
Thumbs.db

# Logs
logs/
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Build outputs
build/
dist/
";

pub(super) const ENV_EXAMPLE: &str = "\
# Environment Configuration
NODE_ENV=development
PORT=3000
DATABASE_URL=sqlite:///database.db

# API Keys
API_KEY=your_api_key_here

# External Services
STRIPE_SECRET_KEY=sk_test_...
STRIPE_PUBLISHABLE_KEY=pk_test_...
";

const PYTHON_REQUIREMENTS: &[&str] = &["flask==2.3.3", "flask-cors==4.0.0", "python-dotenv==1.0.0"];

/// MIT license text for `year`.
pub(super) fn mit_license(year: i32) -> String {
    format!(
        "\
MIT License

Copyright (c) {year}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"
    )
}

/// Minimal HTML shell with a `#root` mount point.
pub(super) fn index_html(title: &str) -> String {
    format!(
        "\
<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{}</title>
</head>
<body>
    <div id=\"root\"></div>
</body>
</html>
",
        escape_html(title)
    )
}

/// `package.json` for the frontend when a framework that uses npm is selected.
pub(super) fn frontend_package_json(stack: &TechStack) -> Option<String> {
    if !stack.contains_any(Category::Frontend, &["React", "Vue.js", "Angular"]) {
        return None;
    }

    let mut manifest = json!({
        "name": "frontend",
        "version": "0.1.0",
        "private": true,
        "scripts": {},
        "dependencies": {},
        "devDependencies": {},
    });

    if stack.contains(Category::Frontend, "React") {
        manifest["scripts"] = json!({
            "start": "react-scripts start",
            "build": "react-scripts build",
            "test": "react-scripts test",
        });
        manifest["dependencies"] = json!({
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
        });
        manifest["devDependencies"] = json!({
            "react-scripts": "5.0.1",
        });
    }

    Some(format!("{manifest:#}\n"))
}

/// `requirements.txt` when a Python backend is selected.
pub(super) fn backend_requirements(stack: &TechStack) -> Option<String> {
    if !stack.contains_any(Category::Backend, &["Python", "Flask", "Django", "FastAPI"]) {
        return None;
    }
    let mut out = PYTHON_REQUIREMENTS.join("\n");
    out.push('\n');
    Some(out)
}

/// `package.json` when a Node backend is selected.
pub(super) fn backend_package_json(stack: &TechStack) -> Option<String> {
    if !stack.contains_any(Category::Backend, &["Node.js", "Express"]) {
        return None;
    }
    let manifest = json!({
        "name": "backend",
        "version": "1.0.0",
        "main": "server.js",
        "scripts": {
            "start": "node server.js",
            "dev": "nodemon server.js",
        },
        "dependencies": {
            "express": "^4.18.2",
            "cors": "^2.8.5",
            "dotenv": "^16.3.1",
        },
        "devDependencies": {
            "nodemon": "^3.0.1",
        },
    });
    Some(format!("{manifest:#}\n"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
