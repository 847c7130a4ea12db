// Element resolution: one test per strategy plus ordering and tie-breaks

use crate::extractors::page_objects::PageRegistry;
use crate::extractors::syntax::CallSite;
use crate::semantic::{ElementResolver, STRATEGY_ORDER, SynonymTables};
use crate::tests::helpers::registry;

fn resolve(registry: &PageRegistry, call: &CallSite) -> Option<(&'static str, String)> {
    ElementResolver::new(registry, SynonymTables::builtin()).resolve_traced(call)
}

#[test]
fn test_strategy_order_is_fixed() {
    assert_eq!(
        STRATEGY_ORDER,
        &[
            "boolean-assertion",
            "literal-selector",
            "assertion-argument",
            "scoped-method",
            "semantic",
            "unscoped",
        ]
    );
}

#[test]
fn test_scoped_method_with_prefix_stripped() {
    let pages = registry(&[("LoginPage", &[("loginButton", "By.id(\"login\")")])]);
    let call = CallSite::new(
        Some("loginPage"),
        "clickLoginButton",
        &[],
        "loginPage.clickLoginButton()",
    );

    assert_eq!(
        resolve(&pages, &call),
        Some(("scoped-method", "By.id(\"login\")".to_string()))
    );
}

#[test]
fn test_boolean_assertion_inference() {
    let pages = registry(&[
        ("CartPage", &[("checkoutButton", "By.id(\"c\")")]),
        ("ProductPage", &[("productClicked", "By.id(\"p\")")]),
    ]);
    let call = CallSite::new(
        None,
        "assertTrue",
        &["isProductClicked()"],
        "assertTrue(isProductClicked())",
    );

    assert_eq!(
        resolve(&pages, &call),
        Some(("boolean-assertion", "By.id(\"p\")".to_string()))
    );
}

#[test]
fn test_literal_selector_is_returned_verbatim() {
    let pages = registry(&[("HomePage", &[("go", "By.id(\"other\")")])]);
    let call = CallSite::new(
        Some("driver.findElement(By.id(\"go\"))"),
        "click",
        &[],
        "driver.findElement(By.id(\"go\")).click()",
    );

    assert_eq!(
        resolve(&pages, &call),
        Some(("literal-selector", "By.id(\"go\")".to_string()))
    );
}

#[test]
fn test_selector_without_quoted_argument_is_not_literal() {
    let pages = registry(&[("HomePage", &[("banner", "By.id(\"b\")")])]);
    let call = CallSite::new(
        Some("driver"),
        "findElement",
        &["By.id(bannerId)"],
        "driver.findElement(By.id(bannerId))",
    );

    assert_eq!(resolve(&pages, &call), None);
}

#[test]
fn test_assertion_argument_scoped_expression() {
    let pages = registry(&[
        ("LoginPage", &[("welcomeText", "By.id(\"w\")")]),
        ("SearchPage", &[("resultTitle", "By.id(\"r\")")]),
    ]);
    let call = CallSite::new(
        None,
        "assertEquals",
        &["searchPage.getResultTitle()", "\"Laptop\""],
        "assertEquals(searchPage.getResultTitle(), \"Laptop\")",
    );

    assert_eq!(
        resolve(&pages, &call),
        Some(("assertion-argument", "By.id(\"r\")".to_string()))
    );
}

#[test]
fn test_assertion_argument_direct_key() {
    let pages = registry(&[("CartPage", &[("itemCount", "By.id(\"n\")")])]);
    let call = CallSite::new(None, "assertEquals", &["itemCount", "3"], "assertEquals(itemCount, 3)");

    assert_eq!(
        resolve(&pages, &call),
        Some(("assertion-argument", "By.id(\"n\")".to_string()))
    );
}

#[test]
fn test_semantic_synonyms_without_receiver() {
    let pages = registry(&[("LoginPage", &[("pwdInput", "By.id(\"pwd\")")])]);
    let call = CallSite::new(None, "typePassword", &["secret"], "typePassword(secret)");

    assert_eq!(
        resolve(&pages, &call),
        Some(("semantic", "By.id(\"pwd\")".to_string()))
    );
}

#[test]
fn test_receiver_mismatch_falls_through_to_semantic() {
    let pages = registry(&[("CartPage", &[("checkoutButton", "By.id(\"c\")")])]);
    let call = CallSite::new(
        Some("homePage"),
        "clickCheckoutButton",
        &[],
        "homePage.clickCheckoutButton()",
    );

    assert_eq!(
        resolve(&pages, &call),
        Some(("semantic", "By.id(\"c\")".to_string()))
    );
}

#[test]
fn test_unknown_call_resolves_to_none() {
    let pages = registry(&[("LoginPage", &[("loginButton", "By.id(\"login\")")])]);
    let call = CallSite::new(Some("driver"), "quit", &[], "driver.quit()");

    assert_eq!(resolve(&pages, &call), None);
}

#[test]
fn test_first_key_in_declaration_order_wins() {
    let pages = registry(&[(
        "CartPage",
        &[("cartTotal", "By.id(\"total\")"), ("cartIcon", "By.id(\"icon\")")],
    )]);
    let call = CallSite::new(Some("cartPage"), "clickCart", &[], "cartPage.clickCart()");

    assert_eq!(
        resolve(&pages, &call).map(|(_, s)| s),
        Some("By.id(\"total\")".to_string())
    );
}

#[test]
fn test_page_objects_are_searched_by_class_name() {
    // both pages hold a matching key; lexicographic class order picks AccountPage
    let pages = registry(&[
        ("ZebraPage", &[("searchBox", "By.id(\"z\")")]),
        ("AccountPage", &[("searchBox", "By.id(\"a\")")]),
    ]);
    let call = CallSite::new(None, "typeSearchBox", &["\"x\""], "typeSearchBox(\"x\")");

    assert_eq!(
        resolve(&pages, &call).map(|(_, s)| s),
        Some("By.id(\"a\")".to_string())
    );
}
