#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("portfolio-fx runs in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio_fx::frontend::run();
}
