#![allow(dead_code)]

use std::io::Write as _;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher as _};
use namkeen_web_ui::{Opts, Server};
use rand_core::OsRng;
use tempfile::NamedTempFile;

pub const SELLER_EMAIL: &str = "kirana@namkeen.example";
pub const SELLER_PASSWORD: &str = "garam-masala-42";

/// A test server on a random port with a single-seller directory.
pub struct TestServer {
    base_url: String,
    _sellers_file: NamedTempFile,
}

impl TestServer {
    pub async fn start() -> Self {
        let mut sellers_file = NamedTempFile::new().expect("Failed to create temp file");
        let hash = Argon2::default()
            .hash_password(
                SELLER_PASSWORD.as_bytes(),
                &SaltString::generate(&mut OsRng),
            )
            .expect("Failed to hash password")
            .to_string();
        write!(
            sellers_file,
            r#"[{{"email": "{SELLER_EMAIL}", "password_hash": "{hash}"}}]"#
        )
        .expect("Failed to write sellers file");

        let opts = Opts::new(
            "127.0.0.1:0".to_string(),
            None,  // cors_origin
            Some(sellers_file.path().to_path_buf()),
            false, // reuseport
        );

        let server = Server::init(opts).await.expect("Failed to start test server");
        let base_url = format!("http://{}", server.addr().expect("No local addr"));

        tokio::spawn(server.run());

        Self {
            base_url,
            _sellers_file: sellers_file,
        }
    }

    /// Create a new `Driver` with its own cookie jar (independent
    /// browser session).
    pub fn driver(&self) -> Driver {
        Driver::new(self.base_url.clone())
    }
}

/// HTTP client driver for interacting with the storefront in tests.
pub struct Driver {
    client: reqwest::Client,
    base_url: String,
}

impl Driver {
    fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            // Don't auto-follow redirects - let tests assert on redirect targets.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request to the given path.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Send a GET request with a hand-made `seller-session` cookie,
    /// bypassing the jar.
    pub async fn get_with_session(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header(
                reqwest::header::COOKIE,
                format!("seller-session={token}"),
            )
            .send()
            .await
            .expect("GET request failed")
    }

    /// Send a form POST to the given path.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Sign in as the test seller. Returns the session token value the
    /// server set, read from the `Set-Cookie` header.
    pub async fn login(&self) -> String {
        self.login_with_redirect(None).await
    }

    /// Sign in, optionally carrying a `redirect` form field, and
    /// assert the post-login redirect matches.
    pub async fn login_with_redirect(&self, redirect: Option<&str>) -> String {
        let mut form = vec![("email", SELLER_EMAIL), ("password", SELLER_PASSWORD)];
        if let Some(redirect) = redirect {
            form.push(("redirect", redirect));
        }

        let resp = self.post_form("/seller/login", &form).await;
        assert_eq!(
            resp.status(),
            reqwest::StatusCode::SEE_OTHER,
            "Expected redirect after login, got {}",
            resp.status()
        );

        let location = resp
            .headers()
            .get("location")
            .expect("Missing Location header on login redirect")
            .to_str()
            .expect("Invalid Location header");
        assert_eq!(location, redirect.unwrap_or("/seller"));

        session_cookie_value(&resp).expect("Login response set no session cookie")
    }
}

/// Extract the `seller-session` value from a response's `Set-Cookie`
/// headers.
pub fn session_cookie_value(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get_all(reqwest::header::SET_COOKIE)
        .into_iter()
        .filter_map(|header| header.to_str().ok())
        .find_map(|cookie| {
            let (name_value, _attrs) = cookie.split_once(';').unwrap_or((cookie, ""));
            let (name, value) = name_value.split_once('=')?;
            (name.trim() == "seller-session").then(|| value.to_owned())
        })
}
