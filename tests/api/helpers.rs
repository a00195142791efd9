use actix_http::{encoding::Decoder, Payload};
use fake::{
    faker::{
        internet::en::Username,
        name::en::{FirstName, LastName},
    },
    Fake,
};
use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use userfn::{
    application::Application,
    settings::{get_db_pool, get_settings, DatabaseSettings, Settings},
    telemetry::{get_subscriber, init_subscriber},
};
use uuid::Uuid;

pub type TestResponse = awc::ClientResponse<Decoder<Payload>>;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber)
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber)
    };
});

pub enum BootstrapType {
    Default,
    Users,
}

pub struct TestApplication {
    pub address: String,
    pub port: u16,
    pub db_pool: PgPool,
    pub settings: Settings,
    test_users: Vec<TestUser>,
}

impl TestApplication {
    pub fn http_client(&self) -> awc::Client {
        awc::Client::default()
    }

    pub fn test_users(&self) -> &[TestUser] {
        &self.test_users
    }

    pub fn test_user(&self) -> TestUser {
        self.test_users.first().unwrap().clone()
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", &self.address, user_id)
    }

    pub async fn post_user(&self, user_id: &str, body: &serde_json::Value) -> TestResponse {
        self.http_client()
            .post(self.user_url(user_id))
            .send_json(body)
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_user_raw(&self, user_id: &str, body: &'static str) -> TestResponse {
        self.http_client()
            .post(self.user_url(user_id))
            .send_body(body)
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_user(&self, user_id: &str) -> TestResponse {
        self.http_client()
            .get(self.user_url(user_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_users(&self) -> TestResponse {
        self.http_client()
            .get(format!("{}/users", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_user(&self, user_id: &str, body: &serde_json::Value) -> TestResponse {
        self.http_client()
            .put(self.user_url(user_id))
            .send_json(body)
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_user(&self, user_id: &str) -> TestResponse {
        self.http_client()
            .delete(self.user_url(user_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn stored_user(&self, user_id: &str) -> Option<StoredUser> {
        sqlx::query_as::<_, StoredUser>(
            "SELECT id, first_name, last_name, username FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db_pool)
        .await
        .expect("Failed to fetch stored user.")
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct StoredUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

pub async fn spawn_app(bootstrap_type: BootstrapType) -> TestApplication {
    Lazy::force(&TRACING);

    let settings = {
        let mut settings = get_settings().expect("Failed to read settings");

        settings.database.database_name = Some(Uuid::new_v4().to_string());
        settings.application.port = 0;

        settings
    };

    configure_database(&settings.database).await;

    let application = Application::build(settings.clone())
        .await
        .expect("Failed to build application");

    let application_port = application.port();

    let _ = tokio::spawn(application.run_until_stopped());

    let mut test_application = TestApplication {
        address: format!("http://localhost:{}", application_port),
        port: application_port,
        db_pool: get_db_pool(&settings.database)
            .await
            .expect("Failed to connect to database"),
        settings,
        test_users: Vec::new(),
    };

    match bootstrap_type {
        BootstrapType::Default => (),
        BootstrapType::Users => {
            for _ in 0..3 {
                let test_user = TestUser::generate();
                test_user.store(&test_application.db_pool).await;

                test_application.test_users.push(test_user);
            }
        }
    }

    test_application
}

async fn configure_database(settings: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&settings.without_db().unwrap())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(&*format!(
            r#"CREATE DATABASE "{}";"#,
            settings.database_name.as_ref().unwrap()
        ))
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect_with(settings.with_db().unwrap())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub async fn teardown(settings: &DatabaseSettings) {
    let mut connection = PgConnection::connect_with(&settings.without_db().unwrap())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(&*format!(
            r#"DROP DATABASE "{}" WITH (FORCE);"#,
            settings.database_name.as_ref().unwrap()
        ))
        .await
        .expect("Failed to drop database.");
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl TestUser {
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            username: Username().fake(),
        }
    }

    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "first_name": self.first_name,
            "last_name": self.last_name,
            "username": self.username
        })
    }

    pub async fn store(&self, pool: &PgPool) {
        sqlx::query(
            "INSERT INTO users (id, first_name, last_name, username) VALUES ($1, $2, $3, $4)",
        )
        .bind(&self.id)
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.username)
        .execute(pool)
        .await
        .expect("Failed to store test user.");
    }
}
