fn main() {
    folio_adapter_web_leptos::start();
}
