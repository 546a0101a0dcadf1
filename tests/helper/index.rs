//! Download index test utilities

use mockito::{Mock, Server, ServerGuard};
use tempfile::TempDir;

use go_version_vars::config::Config;

/// Build an index page resembling the Go downloads listing
pub fn index_page(versions: &[&str]) -> String {
    let mut page = String::from("<html><body><table class=\"downloadtable\">\n");
    for version in versions {
        for file in [
            format!("go{}.src.tar.gz", version),
            format!("go{}.darwin-arm64.tar.gz", version),
            format!("go{}.linux-amd64.tar.gz", version),
            format!("go{}.windows-amd64.zip", version),
        ] {
            page.push_str(&format!(
                "<tr><td class=\"filename\"><a class=\"download\" href=\"/dl/{0}\">{0}</a></td></tr>\n",
                file
            ));
        }
    }
    page.push_str("</table></body></html>\n");
    page
}

/// Start a server that serves `body` at `/dl/`
pub async fn serve_index(status: usize, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/dl/")
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await;
    (server, mock)
}

/// Config pointing at `server` and writing into a fresh temp dir
pub fn test_config(server: &ServerGuard) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        index_url: format!("{}/dl/", server.url()),
        output_path: temp_dir.path().join("main.yml"),
        ..Config::default()
    };
    (temp_dir, config)
}
