pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,plotline_graph=debug")
        .init();
}
