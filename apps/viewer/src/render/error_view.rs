use crate::render::html::escape;

pub const ERROR_TITLE: &str = "Profile Unavailable";

/// Static panel shown whenever the profile cannot be loaded. The only dynamic
/// part is the name of the variable the operator has to set.
pub fn error_panel(env_var: &str) -> String {
    let var = escape(env_var);
    format!(
        "<main class=\"unavailable\">\n\
         <h1>{ERROR_TITLE}</h1>\n\
         <p class=\"error\">Could not load profile data. Please ensure <code>{var}</code> is set correctly in your deployment settings.</p>\n\
         <div class=\"fix\">\n\
         <p class=\"fix-title\">// How to fix:</p>\n\
         <p>1. Open your hosting provider's environment variable settings</p>\n\
         <p>2. Add {var} = yourname</p>\n\
         <p>3. Redeploy or restart the viewer</p>\n\
         </div>\n\
         </main>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_names_the_variable() {
        let html = error_panel("TRUTH_ENGINE_HANDLE");
        assert!(html.contains("<h1>Profile Unavailable</h1>"));
        assert!(html.contains("<code>TRUTH_ENGINE_HANDLE</code>"));
        assert!(html.contains("Add TRUTH_ENGINE_HANDLE = yourname"));
    }
}
