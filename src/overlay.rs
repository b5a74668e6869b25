use crate::constants::DRAW_HINT_ID;
use web_sys as web;

#[inline]
pub fn hide_draw_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DRAW_HINT_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_draw_hint_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(DRAW_HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}
