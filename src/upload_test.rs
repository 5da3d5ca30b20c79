use super::*;

#[test]
fn selected_file_name_is_shown() {
    assert_eq!(label_text(Some("pedido.pdf"), "Selecionar arquivo"), "pedido.pdf");
}

#[test]
fn empty_selection_shows_placeholder() {
    assert_eq!(label_text(None, "Selecionar arquivo"), "Selecionar arquivo");
}
