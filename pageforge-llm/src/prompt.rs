//! Prompt enhancement.
//!
//! The extraction engine downstream recognizes a handful of file-marker
//! conventions, with `**filename**` + fenced block as the preferred one. The
//! enhanced prompt pins the model to exactly that convention so extraction
//! normally succeeds on the first strategy.

/// Wrap a user's page description in the strict formatting instructions the
/// extractor expects.
pub fn enhance_prompt(request: &str) -> String {
    format!(
        r#"IMPORTANT: You must format your response EXACTLY as described below, using the exact file markers and code block format.

Generate a complete, modern-looking single-page web application using vanilla HTML, CSS, and JavaScript based on this request: "{request}"

The application must be fully functional, interactive, and responsive.

FORMATTING REQUIREMENTS:
- Use exactly this pattern for every file: **filename** followed immediately by a fenced code block
- Use exactly these three filenames: **index.html**, **style.css**, **script.js**
- Put each file in its own code block tagged with the matching language (html, css, javascript)
- Any deviation from this format makes the response unusable

TECHNICAL REQUIREMENTS:
- Vanilla HTML, CSS and JavaScript only; no frameworks or build steps
- Responsive and mobile-friendly layout (flexbox/grid, @media breakpoints)
- Modern JavaScript (ES6+, async/await, addEventListener-based wiring)
- Expose an init() entry function and wire it on DOMContentLoaded
- Semantic HTML with ARIA attributes where they matter
- Handle errors and log progress with console.log/console.error

RESPONSE SHAPE:

**index.html**
```html
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>App Title</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <!-- semantic page structure -->
  <script src="script.js"></script>
</body>
</html>
```

**style.css**
```css
/* complete, responsive stylesheet */
```

**script.js**
```javascript
document.addEventListener('DOMContentLoaded', init);

function init() {{
  // complete application logic
}}
```

REMEMBER: every file starts with **filename** on its own line, immediately followed by its code block, and all three files must be complete and production-ready."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_user_request() {
        let prompt = enhance_prompt("a pomodoro timer");
        assert!(prompt.contains("\"a pomodoro timer\""));
    }

    #[test]
    fn pins_the_marker_convention() {
        let prompt = enhance_prompt("anything");
        assert!(prompt.contains("**index.html**"));
        assert!(prompt.contains("**style.css**"));
        assert!(prompt.contains("**script.js**"));
        assert!(prompt.contains("```html"));
    }
}
