const RELEASE_DATE: &str = "02/06/2025";
const AUTHOR: &str = "judeeey";
const HOMEPAGE: &str = "https://github.com/judeeey/neoclock";

/// Print version metadata
pub fn run() {
    println!("🕒 neoclock v{}", env!("CARGO_PKG_VERSION"));
    println!("📅 Released: {}", RELEASE_DATE);
    println!("👤 Made by: {}", AUTHOR);
    println!("🌐 GitHub: {}", HOMEPAGE);
}
