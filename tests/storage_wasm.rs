//! Round-trip del StorageAdapter contra el localStorage real del browser.
//! Se ejecuta con `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use creators_dashboard::utils::StorageAdapter;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn set_y_get_hacen_round_trip() {
    let storage = StorageAdapter::new("test_rt_");
    storage.clear();

    assert!(storage.set("token", &"abc123".to_string()));
    let value: String = storage.get("token", String::new());
    assert_eq!(value, "abc123");

    storage.clear();
}

#[wasm_bindgen_test]
fn clave_ausente_devuelve_default() {
    let storage = StorageAdapter::new("test_absent_");
    storage.clear();

    let value: String = storage.get("no-existe", "default".to_string());
    assert_eq!(value, "default");
}

#[wasm_bindgen_test]
fn json_corrupto_devuelve_default() {
    let storage = StorageAdapter::new("test_bad_");
    storage.clear();

    let raw = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    raw.set_item("test_bad_roto", "{esto no es json").unwrap();

    let value: u32 = storage.get("roto", 7);
    assert_eq!(value, 7);

    storage.clear();
}

#[wasm_bindgen_test]
fn clear_solo_borra_el_prefijo_propio() {
    let mine = StorageAdapter::new("test_mine_");
    let other = StorageAdapter::new("test_other_");
    mine.clear();
    other.clear();

    mine.set("a", &1u32);
    mine.set("b", &2u32);
    other.set("c", &3u32);

    let removed = mine.clear();
    assert_eq!(removed, 2);

    let survivor: u32 = other.get("c", 0);
    assert_eq!(survivor, 3);

    other.clear();
}
