use actix_http::Method;

#[userfn_macros::test(bootstrap = "Users")]
async fn unsupported_methods_fail() {
    // Arrange
    let user = app.test_user();

    for method in [Method::PATCH, Method::OPTIONS] {
        // Act
        let response = app
            .http_client()
            .request(method, app.user_url(&user.id))
            .send()
            .await
            .expect("Failed to execute request.");

        // Assert
        assert_eq!(500, response.status().as_u16());
    }

    assert!(app.stored_user(&user.id).await.is_some());
}

#[userfn_macros::test(bootstrap = "Users")]
async fn any_prefix_before_users_is_accepted() {
    // Arrange
    let user = app.test_user();

    // Act
    let mut response = app
        .http_client()
        .get(format!("{}/api/v1/users/{}", &app.address, &user.id))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(user.id, body["ID"]);
}
