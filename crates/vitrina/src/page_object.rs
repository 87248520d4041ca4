//! Page objects for the storefront admin.
//!
//! A page object owns the locators for one page and exposes its
//! interactions as named operations, keeping selector details out of the
//! scenario layer. Locator failures are not caught here; they propagate to
//! the runner as [`crate::VitrinaError::ElementNotFound`].

use crate::browser::Page;
use crate::locator::Locator;
use crate::result::VitrinaResult;

/// Trait for page objects representing a page in the UI
pub trait PageObject {
    /// URL path this page lives under (e.g. `/login`)
    fn url_pattern(&self) -> &str;

    /// Page name for logging
    fn page_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The admin login page.
///
/// Precondition for all operations: the login page is currently loaded in
/// the session.
#[derive(Debug, Clone)]
pub struct LoginPage {
    username_input: Locator,
    password_input: Locator,
    submit_button: Locator,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    /// Create the login page object with its element locators
    #[must_use]
    pub fn new() -> Self {
        Self {
            username_input: Locator::css("input#Email"),
            password_input: Locator::css("input#Password"),
            submit_button: Locator::css("button[type='submit']"),
        }
    }

    /// Write `value` into the username field
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the field cannot be located
    pub async fn set_user_name(&self, page: &mut Page, value: &str) -> VitrinaResult<()> {
        page.fill(&self.username_input, value).await
    }

    /// Write `value` into the password field
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the field cannot be located
    pub async fn set_password(&self, page: &mut Page, value: &str) -> VitrinaResult<()> {
        page.fill(&self.password_input, value).await
    }

    /// Activate the submit control, causing navigation
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the control cannot be located
    pub async fn click_login(&self, page: &mut Page) -> VitrinaResult<()> {
        page.click(&self.submit_button).await
    }

    /// Fill both credential fields and submit
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if any element cannot be located
    pub async fn login(&self, page: &mut Page, email: &str, password: &str) -> VitrinaResult<()> {
        self.set_user_name(page, email).await?;
        self.set_password(page, password).await?;
        self.click_login(page).await
    }
}

impl PageObject for LoginPage {
    fn url_pattern(&self) -> &str {
        "/login"
    }

    fn page_name(&self) -> &str {
        "LoginPage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_metadata() {
        let page = LoginPage::new();
        assert_eq!(page.url_pattern(), "/login");
        assert_eq!(page.page_name(), "LoginPage");
    }

    #[test]
    fn test_locators_are_css() {
        let page = LoginPage::new();
        assert_eq!(page.username_input.selector().to_css(), "input#Email");
        assert_eq!(page.password_input.selector().to_css(), "input#Password");
        assert_eq!(page.submit_button.selector().to_css(), "button[type='submit']");
    }

    #[cfg(not(feature = "browser"))]
    mod driven_tests {
        use super::*;
        use crate::browser::{Browser, BrowserConfig, MockScript};
        use crate::result::VitrinaError;

        #[tokio::test]
        #[allow(clippy::unwrap_used)]
        async fn test_login_drives_all_three_elements() {
            let config = BrowserConfig::default().with_script(
                MockScript::new()
                    .with_title_after_goto("nopCommerce demo store. Login")
                    .with_title_after_submit("Dashboard / nopCommerce administration"),
            );
            let browser = Browser::launch(config).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            page.goto("https://example.test/login").await.unwrap();

            let login = LoginPage::new();
            login.login(&mut page, "admin@yourstore.com", "admin").await.unwrap();
            assert_eq!(
                page.title().await.unwrap(),
                "Dashboard / nopCommerce administration"
            );
        }

        #[tokio::test]
        #[allow(clippy::unwrap_used)]
        async fn test_missing_field_propagates() {
            let config = BrowserConfig::default()
                .with_script(MockScript::new().with_missing_selector("input#Password"));
            let browser = Browser::launch(config).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            page.goto("https://example.test/login").await.unwrap();

            let login = LoginPage::new();
            let err = login
                .login(&mut page, "admin@yourstore.com", "admin")
                .await
                .unwrap_err();
            match err {
                VitrinaError::ElementNotFound { selector } => {
                    assert_eq!(selector, "input#Password");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
