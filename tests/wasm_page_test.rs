//! Browser tests for the profile page bindings
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Object, Promise, Reflect};
use myinfo_wasm::dom::MountedPage;
use myinfo_wasm::{GenreId, MyInfoError, PageConfig, SaveState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<form class="info-form" action="/mypage/myinfo" method="post">
  <input class="editable" name="email" value="hong@example.com" disabled>
  <input class="editable" name="zipcode" value="" disabled>
  <input class="editable" name="addr" value="" disabled>
  <input class="editable" name="detailAddr" value="" disabled>
  <button type="button" id="addressBtn" disabled>주소 검색</button>
  <div class="genre-card active" data-genre-id="1">소설</div>
  <div class="genre-card" data-genre-id="2">에세이</div>
  <div class="genre-card" data-genre-id="3">역사</div>
  <div class="genre-card" data-genre-id="x">깨진 태그</div>
  <button type="button" id="editBtn">수정</button>
  <button type="submit" id="saveBtn" style="display:none">저장</button>
</form>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_fixture() -> MountedPage {
    document().body().unwrap().set_inner_html(FIXTURE);
    MountedPage::mount(PageConfig::default()).unwrap()
}

fn by_selector<T: JsCast>(selector: &str) -> T {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<T>()
        .unwrap()
}

fn window_prop(name: &str) -> JsValue {
    Reflect::get(&web_sys::window().unwrap(), &JsValue::from_str(name)).unwrap()
}

/// Replace `fetch`, `alert` and native form submission with recorders.
///
/// The stubbed fetch records the request and stays pending until
/// `window.__resolveFetch()` answers it with `status`.
fn install_recorders(status: u16) {
    Function::new_with_args(
        "status",
        "window.__fetchCalls = []; \
         window.__alerts = []; \
         window.__submits = 0; \
         window.alert = function (message) { window.__alerts.push(String(message)); }; \
         HTMLFormElement.prototype.submit = function () { window.__submits += 1; }; \
         window.fetch = function (request) { \
           return request.text().then(function (body) { \
             window.__fetchCalls.push({ \
               method: request.method, \
               contentType: request.headers.get('Content-Type'), \
               body: body \
             }); \
             return new Promise(function (resolve) { \
               window.__resolveFetch = function () { \
                 resolve(new Response(null, { status: status })); \
               }; \
             }); \
           }); \
         };",
    )
    .call1(&JsValue::NULL, &JsValue::from(status))
    .unwrap();
}

fn recorded_alerts() -> Vec<String> {
    Array::from(&window_prop("__alerts"))
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

fn recorded_submits() -> u32 {
    window_prop("__submits").as_f64().unwrap() as u32
}

fn recorded_fetch(field: &str) -> String {
    let calls = Array::from(&window_prop("__fetchCalls"));
    assert_eq!(calls.length(), 1, "expected exactly one genre request");
    Reflect::get(&calls.get(0), &JsValue::from_str(field))
        .unwrap()
        .as_string()
        .unwrap()
}

fn resolve_fetch() {
    window_prop("__resolveFetch")
        .dyn_into::<Function>()
        .unwrap()
        .call0(&JsValue::NULL)
        .unwrap();
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// `window.daum.Postcode` stand-in; `open` runs `on_open` with `options`
fn install_postcode(on_open: &str) {
    let body = format!("this.open = function () {{ {} }};", on_open);
    let postcode = Function::new_with_args("options", &body);
    let daum = Object::new();
    Reflect::set(&daum, &JsValue::from_str("Postcode"), &postcode).unwrap();
    Reflect::set(
        &web_sys::window().unwrap(),
        &JsValue::from_str("daum"),
        &daum,
    )
    .unwrap();
}

/// Enter edit mode, add genre 2 to the initial genre 1 and click save.
async fn edit_and_click_save() -> MountedPage {
    let page = mount_fixture();
    by_selector::<HtmlElement>("#editBtn").click();
    by_selector::<HtmlElement>("[data-genre-id='2']").click();
    by_selector::<HtmlElement>("#saveBtn").click();
    sleep(20).await;
    page
}

#[wasm_bindgen_test]
fn test_edit_button_toggles_fields() {
    let page = mount_fixture();
    let email: HtmlInputElement = by_selector("input[name='email']");
    let edit: HtmlElement = by_selector("#editBtn");
    let save: HtmlElement = by_selector("#saveBtn");

    edit.click();

    assert!(page.controller.borrow().is_editing());
    assert!(!email.disabled());
    assert!(!by_selector::<HtmlButtonElement>("#addressBtn").disabled());
    assert_eq!(save.style().get_property_value("display").unwrap(), "inline-block");
    assert_eq!(edit.inner_text(), "취소");

    edit.click();

    assert!(email.disabled());
    assert_eq!(save.style().get_property_value("display").unwrap(), "none");
    assert_eq!(edit.inner_text(), "수정");
}

#[wasm_bindgen_test]
fn test_genre_click_marks_tag_active() {
    let page = mount_fixture();
    let second: HtmlElement = by_selector("[data-genre-id='2']");

    second.click();
    assert!(!second.class_list().contains("active"));

    by_selector::<HtmlElement>("#editBtn").click();
    assert_eq!(second.get_attribute("data-editable").as_deref(), Some("true"));
    second.click();

    assert!(second.class_list().contains("active"));
    assert_eq!(
        page.controller.borrow().selection().ids(),
        &[GenreId(1), GenreId(2)]
    );
}

#[wasm_bindgen_test]
fn test_submit_event_releases_fields() {
    let _page = mount_fixture();
    let email: HtmlInputElement = by_selector("input[name='email']");
    assert!(email.disabled());

    let event = Event::new("submit").unwrap();
    by_selector::<HtmlElement>(".info-form")
        .dispatch_event(&event)
        .unwrap();

    assert!(!email.disabled());
    assert!(!by_selector::<HtmlButtonElement>("#addressBtn").disabled());
}

#[wasm_bindgen_test]
fn test_address_widget_fills_fields() {
    let page = mount_fixture();
    by_selector::<HtmlElement>("#editBtn").click();

    install_postcode(
        "options.oncomplete({ zonecode: '06236', roadAddress: '', jibunAddress: '123 Main' });",
    );

    page.open_address_lookup().unwrap();

    assert_eq!(by_selector::<HtmlInputElement>("input[name='zipcode']").value(), "06236");
    assert_eq!(by_selector::<HtmlInputElement>("input[name='addr']").value(), "123 Main");
    let detail: HtmlElement = by_selector("input[name='detailAddr']");
    assert!(document().active_element().unwrap().is_same_node(Some(detail.unchecked_ref())));
}

#[wasm_bindgen_test]
async fn test_save_posts_genres_then_submits_once() {
    install_recorders(200);
    let page = edit_and_click_save().await;
    let save: HtmlButtonElement = by_selector("#saveBtn");

    assert_eq!(page.controller.borrow().save_state(), SaveState::Saving);
    assert!(save.disabled());
    assert_eq!(recorded_fetch("method"), "POST");
    assert_eq!(recorded_fetch("contentType"), "application/json");
    assert_eq!(recorded_fetch("body"), "[1,2]");
    assert_eq!(recorded_submits(), 0);

    resolve_fetch();
    sleep(20).await;

    assert_eq!(recorded_submits(), 1);
    assert!(recorded_alerts().is_empty());
    assert!(!by_selector::<HtmlInputElement>("input[name='email']").disabled());
    assert!(!save.disabled());
}

#[wasm_bindgen_test]
async fn test_rejected_save_alerts_and_skips_submit() {
    install_recorders(500);
    let page = edit_and_click_save().await;
    let save: HtmlButtonElement = by_selector("#saveBtn");

    assert!(save.disabled());
    assert_eq!(recorded_fetch("body"), "[1,2]");

    resolve_fetch();
    sleep(20).await;

    assert_eq!(recorded_submits(), 0);
    assert_eq!(recorded_alerts(), vec!["저장 중 오류가 발생했습니다.".to_string()]);
    assert_eq!(page.controller.borrow().save_state(), SaveState::Failed);
    assert!(page.controller.borrow().is_editing());
    assert!(!save.disabled());
}

#[wasm_bindgen_test]
fn test_unreadable_address_payload_alerts() {
    install_recorders(200);
    let page = mount_fixture();
    by_selector::<HtmlElement>("#editBtn").click();
    install_postcode("options.oncomplete('oops');");

    page.open_address_lookup().unwrap();

    assert_eq!(recorded_alerts(), vec!["주소 정보를 불러오지 못했습니다.".to_string()]);
    assert_eq!(by_selector::<HtmlInputElement>("input[name='zipcode']").value(), "");
}

#[wasm_bindgen_test]
fn test_deferred_mount_failure_alerts() {
    install_recorders(200);
    document().body().unwrap().set_inner_html("<p>no profile form here</p>");

    let result = MountedPage::mount_or_alert(PageConfig::default());

    assert!(matches!(result, Err(MyInfoError::MissingElement(_))));
    assert_eq!(
        recorded_alerts(),
        vec!["페이지를 준비하지 못했습니다. 새로고침 해주세요.".to_string()]
    );
}

#[wasm_bindgen_test]
fn test_abandoned_widget_callback_is_released() {
    let page = mount_fixture();
    by_selector::<HtmlElement>("#editBtn").click();
    Reflect::set(
        &web_sys::window().unwrap(),
        &JsValue::from_str("__widgets"),
        &Array::new(),
    )
    .unwrap();
    install_postcode("window.__widgets.push(options);");

    page.open_address_lookup().unwrap();
    page.open_address_lookup().unwrap();

    let widgets = Array::from(&window_prop("__widgets"));
    assert_eq!(widgets.length(), 2);
    let payload = Object::new();
    Reflect::set(&payload, &JsValue::from_str("zonecode"), &JsValue::from_str("04524")).unwrap();
    Reflect::set(
        &payload,
        &JsValue::from_str("roadAddress"),
        &JsValue::from_str("서울 중구 세종대로 110"),
    )
    .unwrap();

    let oncomplete = |options: JsValue| {
        Reflect::get(&options, &JsValue::from_str("oncomplete"))
            .unwrap()
            .dyn_into::<Function>()
            .unwrap()
    };
    assert!(oncomplete(widgets.get(0)).call1(&JsValue::NULL, &payload).is_err());
    assert_eq!(by_selector::<HtmlInputElement>("input[name='zipcode']").value(), "");

    oncomplete(widgets.get(1)).call1(&JsValue::NULL, &payload).unwrap();
    assert_eq!(by_selector::<HtmlInputElement>("input[name='zipcode']").value(), "04524");
    assert_eq!(
        by_selector::<HtmlInputElement>("input[name='addr']").value(),
        "서울 중구 세종대로 110"
    );
}
