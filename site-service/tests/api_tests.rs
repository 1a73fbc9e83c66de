mod common;

use auth::Claims;
use common::FakeMailer;
use common::TestApp;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use reqwest::StatusCode;
use serde_json::json;

fn application_form(job_id: &str, resume: Option<(&str, Vec<u8>)>) -> Form {
    let form = Form::new()
        .text("jobId", job_id.to_string())
        .text("fullName", "Dana Applicant")
        .text("email", "dana@example.com")
        .text("phone", "+1 555 010 2000")
        .text("coverLetter", "I would love to join.");

    match resume {
        Some((name, bytes)) => form.part("resume", Part::bytes(bytes).file_name(name.to_string())),
        None => form,
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_register_issues_token_for_new_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "phone": "5550100200",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let user_id = body["userId"].as_str().unwrap();
    let claims = app
        .jwt_handler
        .decode(body["token"].as_str().unwrap())
        .expect("Token should be valid");

    assert_eq!(claims.sub, user_id);
    assert!(app.users.contains(user_id));
    assert_eq!(body["emailStatus"]["sent"], true);
    assert_eq!(app.mailer.sent_to(), vec!["nicola@example.com".to_string()]);
}

#[tokio::test]
async fn test_register_token_resolves_to_current_user() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.register("nicola", "nicola@example.com").await;

    let response = app
        .get_authenticated("/api/auth/user", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["userData"]["id"], user_id.as_str());
    assert_eq!(body["userData"]["email"], "nicola@example.com");
    assert_eq!(body["userData"]["isAdmin"], false);
    assert!(body["userData"].get("passwordHash").is_none());
    assert!(body["userData"].get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;
    app.register("nicola", "nicola@example.com").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "someone-else",
            "email": "nicola@example.com",
            "phone": "5550100200",
            "password": "another_pass"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.users.count(), 1);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let app = TestApp::spawn().await;

    for body in [
        json!({"username": "ab", "email": "a@example.com", "phone": "5550100200", "password": "pass_word!"}),
        json!({"username": "abc", "email": "not-an-email", "phone": "5550100200", "password": "pass_word!"}),
        json!({"username": "abc", "email": "a@example.com", "phone": "call me", "password": "pass_word!"}),
        json!({"username": "abc", "email": "a@example.com", "phone": "5550100200", "password": "short"}),
    ] {
        let response = app
            .post("/api/auth/register")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }
    assert_eq!(app.users.count(), 0);
}

#[tokio::test]
async fn test_malformed_json_bodies_are_bad_requests() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("phone"), "{body}");

    let response = app
        .post("/api/auth/login")
        .header("content-type", "application/json")
        .body("{\"email\": ")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());

    let response = app
        .post("/api/form")
        .body("name=someone")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
    assert_eq!(app.users.count(), 0);
}

#[tokio::test]
async fn test_requests_over_the_rate_limit_are_rejected() {
    let app = TestApp::spawn_with_rate_limit(3).await;

    for remaining in ["2", "1", "0"] {
        let response = app.get("/health").send().await.expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["ratelimit-limit"], "3");
        assert_eq!(response.headers()["ratelimit-remaining"], remaining);
    }

    let response = app.get("/health").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("Too many requests"));

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "a@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_register_succeeds_when_mail_is_not_configured() {
    let app = TestApp::spawn_with_mailer(FakeMailer::unconfigured()).await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "phone": "5550100200",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["emailStatus"]["sent"], false);
    assert_eq!(
        body["emailStatus"]["missingVars"],
        json!(["SMTP__HOST", "SMTP__PASSWORD"])
    );
    assert_eq!(app.users.count(), 1);
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let app = TestApp::spawn().await;
    let (user_id, _) = app.register("nicola", "nicola@example.com").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["userId"], user_id.as_str());
    let claims = app
        .jwt_handler
        .decode(body["token"].as_str().unwrap())
        .expect("Token should be valid");
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.username.as_deref(), Some("nicola"));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("nicola", "nicola@example.com").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nicola@example.com", "password": "wrong_password" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_with_unknown_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "ghost@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_admin_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/admin/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_malformed_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/admin/users")
        .header("Authorization", "Token abc")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_non_admin_token() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register("nicola", "nicola@example.com").await;

    let response = app
        .get_authenticated("/api/admin/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_with_admin_token() {
    let app = TestApp::spawn().await;
    app.register("nicola", "nicola@example.com").await;
    let (_, token) = app.admin().await;

    let response = app
        .get_authenticated("/api/admin/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let (user_id, _) = app.register("nicola", "nicola@example.com").await;

    let now = chrono::Utc::now().timestamp();
    let expired = app
        .jwt_handler
        .encode(&Claims::with_timestamps(user_id, now - 7200, now - 3600))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/user", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::spawn().await;
    let (user_id, _) = app.register("nicola", "nicola@example.com").await;

    let forged = auth::JwtHandler::new(b"some-other-secret")
        .unwrap()
        .encode(&Claims::for_user(user_id, "nicola".to_string(), 1))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/user", &forged)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_of_deleted_user_is_rejected() {
    let app = TestApp::spawn().await;
    let (user_id, user_token) = app.register("nicola", "nicola@example.com").await;
    let (_, admin_token) = app.admin().await;

    let response = app
        .delete_authenticated(&format!("/api/admin/users/delete/{user_id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!app.users.contains(&user_id));

    let response = app
        .get_authenticated("/api/auth/user", &user_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::spawn().await;
    let (admin_id, admin_token) = app.admin().await;

    let response = app
        .delete_authenticated(&format!("/api/admin/users/delete/{admin_id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.users.contains(&admin_id));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Admins cannot delete their own account");
}

#[tokio::test]
async fn test_admin_user_management() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;

    let response = app
        .post_authenticated("/api/admin/users", &admin_token)
        .json(&json!({
            "username": "editor",
            "email": "editor@example.com",
            "phone": "5550100300",
            "password": "editor_pass",
            "isAdmin": true
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user"]["isAdmin"], true);
    assert_eq!(body["emailStatus"]["sent"], true);
    let id = body["user"]["id"].as_str().unwrap().to_string();

    let response = app
        .get_authenticated(&format!("/api/admin/users/{id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .patch_authenticated(&format!("/api/admin/users/update/{id}"), &admin_token)
        .json(&json!({ "username": "chief-editor", "isAdmin": false }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "chief-editor");
    assert_eq!(body["email"], "editor@example.com");
    assert_eq!(body["isAdmin"], false);

    let response = app
        .patch_authenticated(&format!("/api/admin/users/update/{id}"), &admin_token)
        .json(&json!({ "email": common::ADMIN_EMAIL }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .get_authenticated(
            &format!("/api/admin/users/{}", uuid::Uuid::new_v4()),
            &admin_token,
        )
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get_authenticated("/api/admin/users/not-a-uuid", &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_blog_created_by_admin_is_publicly_listed() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;

    let response = app
        .post_authenticated("/api/admin/blogs", &admin_token)
        .json(&json!({
            "title": "  Launch day  ",
            "content": "We are live.",
            "author": "Admin",
            "tags": ["news", " ", "launch"]
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .get("/api/blogs")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Launch day");
    assert_eq!(posts[0]["content"], "We are live.");
    assert_eq!(posts[0]["author"], "Admin");
    assert_eq!(posts[0]["tags"], json!(["news", "launch"]));
}

#[tokio::test]
async fn test_blog_admin_validation_and_delete() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;
    let (_, user_token) = app.register("nicola", "nicola@example.com").await;

    let response = app
        .post_authenticated("/api/admin/blogs", &user_token)
        .json(&json!({ "title": "t", "content": "c", "author": "a" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post_authenticated("/api/admin/blogs", &admin_token)
        .json(&json!({ "title": "   ", "content": "c", "author": "a" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post_authenticated("/api/admin/blogs", &admin_token)
        .json(&json!({ "title": "Short lived", "content": "c", "author": "a" }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().unwrap();

    let response = app
        .delete_authenticated(&format!("/api/admin/blogs/{id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .delete_authenticated(&format!("/api/admin/blogs/{id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_careers_public_listing_and_detail() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;
    let id = app.create_career(&admin_token, "Backend Engineer").await;

    let response = app
        .get("/api/careers")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = app
        .get(&format!("/api/careers/{id}"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Backend Engineer");
    assert_eq!(body["employmentType"], "Full-time");
    assert_eq!(body["isActive"], true);

    let response = app
        .get(&format!("/api/careers/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post_authenticated("/api/admin/careers", &admin_token)
        .json(&json!({
            "title": "Designer",
            "description": "Design things",
            "location": "Remote",
            "employmentType": "Seasonal"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .delete_authenticated(&format!("/api/admin/careers/{id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_contact_form_submission_and_admin_listing() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;

    for path in ["/api/form", "/api/form/contact"] {
        let response = app
            .post(path)
            .json(&json!({
                "username": "Visitor",
                "email": "visitor@example.com",
                "message": "Hello there"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED, "{path}");
    }

    let response = app
        .post("/api/form/contact")
        .json(&json!({ "username": "Visitor", "email": "nope", "message": "Hi" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .get_authenticated("/api/admin/contacts", &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let contacts = body.as_array().unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0]["message"], "Hello there");

    let id = contacts[0]["id"].as_str().unwrap();
    let response = app
        .delete_authenticated(&format!("/api/admin/contacts/delete/{id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .delete_authenticated(&format!("/api/admin/contacts/delete/{id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_job_application_lifecycle() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;
    let (user_id, user_token) = app.register("dana", "dana@example.com").await;
    let job_id = app.create_career(&admin_token, "Backend Engineer").await;

    let response = app
        .post_authenticated("/api/applications", &user_token)
        .multipart(application_form(
            &job_id,
            Some(("My CV.pdf", b"%PDF-1.4 resume".to_vec())),
        ))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["userId"], user_id.as_str());
    let application_id = body["data"]["id"].as_str().unwrap().to_string();
    let resume = body["data"]["resume"].as_str().unwrap().to_string();
    assert!(resume.starts_with("/uploads/resumes/"));
    assert!(resume.ends_with("-My_CV.pdf"), "{resume}");

    let response = app
        .get(&resume)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"%PDF-1.4 resume");

    let response = app
        .get_authenticated("/api/applications/my-applications", &user_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["job"]["title"], "Backend Engineer");
    assert_eq!(body[0]["job"]["id"], job_id.as_str());

    let response = app
        .get_authenticated("/api/applications", &user_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .get_authenticated(&format!("/api/applications/job/{job_id}"), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["user"]["email"], "dana@example.com");
    assert_eq!(body[0]["user"]["username"], "dana");

    let response = app
        .patch_authenticated(
            &format!("/api/applications/{application_id}/status"),
            &admin_token,
        )
        .json(&json!({ "status": "reviewed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], "reviewed");

    let response = app
        .patch_authenticated(
            &format!("/api/applications/{application_id}/status"),
            &admin_token,
        )
        .json(&json!({ "status": "hired" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .patch_authenticated(
            &format!("/api/applications/{}/status", uuid::Uuid::new_v4()),
            &admin_token,
        )
        .json(&json!({ "status": "accepted" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get_authenticated("/api/applications", &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body[0]["status"], "reviewed");
    assert_eq!(body[0]["job"]["title"], "Backend Engineer");
    assert_eq!(body[0]["user"]["id"], user_id.as_str());
}

#[tokio::test]
async fn test_job_application_rejections() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.admin().await;
    let (_, user_token) = app.register("dana", "dana@example.com").await;
    let job_id = app.create_career(&admin_token, "Backend Engineer").await;

    let response = app
        .post("/api/applications")
        .multipart(application_form(&job_id, Some(("cv.pdf", b"pdf".to_vec()))))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post_authenticated("/api/applications", &user_token)
        .multipart(application_form(&job_id, None))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Please upload a resume");

    let response = app
        .post_authenticated("/api/applications", &user_token)
        .multipart(application_form(&job_id, Some(("cv.exe", b"MZ".to_vec()))))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let oversized = vec![0u8; common::MAX_RESUME_BYTES + 1];
    let response = app
        .post_authenticated("/api/applications", &user_token)
        .multipart(application_form(&job_id, Some(("cv.docx", oversized))))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post_authenticated("/api/applications", &user_token)
        .multipart(application_form(
            &uuid::Uuid::new_v4().to_string(),
            Some(("cv.pdf", b"pdf".to_vec())),
        ))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stored = std::fs::read_dir(app.resume_dir.path()).unwrap().count();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_services_catalog_is_cached() {
    let app = TestApp::spawn().await;

    for _ in 0..2 {
        let response = app
            .get("/api/data/service")
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let services = body["msg"].as_array().unwrap();
        assert_eq!(services.len(), 2);
        assert!(services.iter().any(|s| s["service"] == "SEO"));
    }

    assert_eq!(app.catalog.read_count(), 1);
}

#[tokio::test]
async fn test_email_diagnostics() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/test-email")
        .json(&json!({ "email": "ops@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["messageId"].is_string());
    assert_eq!(app.mailer.sent_to(), vec!["ops@example.com".to_string()]);
}

#[tokio::test]
async fn test_email_diagnostics_reports_missing_settings() {
    let app = TestApp::spawn_with_mailer(FakeMailer::unconfigured()).await;

    let response = app
        .post("/api/auth/test-email")
        .json(&json!({ "email": "ops@example.com", "username": "Ops" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["missingVars"], json!(["SMTP__HOST", "SMTP__PASSWORD"]));
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}
