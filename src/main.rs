//! Todo Frontend Entry Point

fn main() {
    todo_sync_ui::run();
}
