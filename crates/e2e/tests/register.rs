//! Registration form validation against a live workbench deployment.
//!
//! The validation copy asserted here is a contract with the front end; the
//! strings must match the rendered messages exactly.

use anyhow::{Result, ensure};
use wd::{By, keys};
use workbench_e2e::TestContext;

const LENGTH_WARNING: &str = "Password's length must be in 6 ~ 20 characters.";

#[tokio::test]
#[ignore = "requires chromedriver and a running workbench at E2E_BASE_URL"]
async fn invalid_registration_shows_each_validation_message() -> Result<()> {
    let ctx = TestContext::launch("invalid_registration_shows_each_validation_message").await?;
    let outcome = invalid_registration_flow(&ctx).await;
    ctx.conclude(outcome).await
}

#[tokio::test]
#[ignore = "requires chromedriver and a running workbench at E2E_BASE_URL"]
async fn valid_registration_returns_to_the_login_page() -> Result<()> {
    let ctx = TestContext::launch("valid_registration_returns_to_the_login_page").await?;
    let outcome = valid_registration_flow(&ctx).await;
    ctx.conclude(outcome).await
}

async fn invalid_registration_flow(ctx: &TestContext) -> Result<()> {
    ctx.open("/user/login").await?;
    ctx.click(&By::xpath("//a[contains(text(), \"Create an account!\")]"))
        .await?;
    ctx.assert_url("/user/register").await?;

    // Username: empty, then one that already exists.
    let username = By::css("input[formcontrolname='username']");
    ctx.type_into(&username, &touch()).await?;
    assert_message_count(ctx, "Enter your username!", 1).await?;
    ctx.type_into(&username, "test").await?;
    assert_message_count(ctx, "The username already exists!", 1).await?;

    // Email: empty, already taken, then truncated back past the '@'.
    let email = By::css("input[formcontrolname='email']");
    ctx.type_into(&email, &touch()).await?;
    assert_message_count(ctx, "Type your email!", 1).await?;
    let existing_email = "test@gmail.com";
    ctx.type_into(&email, existing_email).await?;
    assert_message_count(ctx, "The email is already used!", 1).await?;
    let at = existing_email.find('@').expect("test vector contains an @");
    ctx.type_into(&email, &keys::backspaces(existing_email.len() - at))
        .await?;
    assert_message_count(ctx, "The email is invalid!", 1).await?;

    // Password: empty, then outside the 6..=20 length bound.
    let password = By::css("input[formcontrolname='password']");
    ctx.type_into(&password, &touch()).await?;
    assert_message_count(ctx, "Type your password!", 1).await?;
    ctx.type_into(&password, "testtesttesttesttesttest").await?; // length 24
    assert_message_count(ctx, LENGTH_WARNING, 1).await?;
    ctx.type_into(&password, &keys::backspaces(12)).await?; // back to length 12
    ctx.wait_for_gone(&validation_message(LENGTH_WARNING)).await?;

    // Confirmation: empty, then mismatched.
    let confirmation = By::css("input[formcontrolname='checkPassword']");
    ctx.type_into(&confirmation, &touch()).await?;
    assert_message_count(ctx, "Type your password again!", 1).await?;
    ctx.type_into(&confirmation, "1234").await?;
    assert_message_count(ctx, "Passwords must match!", 1).await?;

    ctx.click(&By::xpath("//a[@href='/user/login']")).await?;
    ctx.assert_url("/user/login").await?;
    Ok(())
}

async fn valid_registration_flow(ctx: &TestContext) -> Result<()> {
    ctx.open("/user/login").await?;
    ctx.click(&By::xpath("//a[contains(text(), \"Create an account!\")]"))
        .await?;
    ctx.assert_url("/user/register").await?;

    ctx.type_into(&By::css("input[formcontrolname='username']"), "validusername")
        .await?;
    ctx.type_into(
        &By::css("input[formcontrolname='email']"),
        "validemail@gmail.com",
    )
    .await?;
    ctx.type_into(&By::css("input[formcontrolname='password']"), "validpassword")
        .await?;
    ctx.type_into(
        &By::css("input[formcontrolname='checkPassword']"),
        "validpassword",
    )
    .await?;
    ctx.click(&By::css("label[formcontrolname='agree']")).await?;
    ctx.click(&By::css("button[class='ant-btn ant-btn-primary ant-btn-block']"))
        .await?;
    // Sign-up does a server round trip before routing back to login.
    ctx.wait_for_url("/user/login").await?;
    Ok(())
}

/// Locator for a rendered validation message.
fn validation_message(text: &str) -> By {
    By::xpath(format!("//div[contains(text(), \"{text}\")]"))
}

/// A space immediately erased, to mark the field touched and trigger its
/// required-field validation.
fn touch() -> String {
    format!(" {}", keys::BACK_SPACE)
}

async fn assert_message_count(ctx: &TestContext, text: &str, expected: usize) -> Result<()> {
    let count = ctx.visible_count(&validation_message(text)).await?;
    ensure!(
        count == expected,
        "expected {expected} \"{text}\" message(s), found {count}"
    );
    Ok(())
}

#[test]
fn validation_message_locator_embeds_the_copy() {
    let by = validation_message("Passwords must match!");
    assert!(by.to_string().contains("Passwords must match!"));
    assert!(by.to_string().starts_with("xpath "));
}
