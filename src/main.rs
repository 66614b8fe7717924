use kanban_column_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    kanban_column_ui::logging::init();
    tracing::info!("mounting kanban board");
    leptos::mount::mount_to_body(App);
}
