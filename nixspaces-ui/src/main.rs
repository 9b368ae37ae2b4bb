fn main() {
    nixspaces_ui::bootstrap();
}
