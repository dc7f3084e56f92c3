use inject::{Injector, Shared, inject, injectable};

#[derive(Debug)]
struct DatabaseConnection {
    dsn: String,
}

trait ItemRepository: inject::MaybeSendSync {
    fn describe(&self) -> String;
}

injectable! {
    struct StandardItemRepository {
        #[inject("DatabaseConnection")]
        pub connection: Option<Shared<DatabaseConnection>>,
    }
}

impl ItemRepository for StandardItemRepository {
    fn describe(&self) -> String {
        match &self.connection {
            Some(connection) => format!("standard repository on `{}`", connection.dsn),
            None => "standard repository (not connected)".to_string(),
        }
    }
}

injectable! {
    struct CachingItemRepository {
        #[inject("ItemRepository")]
        pub inner: Option<Shared<dyn ItemRepository>>,
    }
}

impl ItemRepository for CachingItemRepository {
    fn describe(&self) -> String {
        match &self.inner {
            Some(inner) => format!("cache over {}", inner.describe()),
            None => "empty cache".to_string(),
        }
    }
}

injectable! {
    struct ItemService {
        #[inject("ItemRepository")]
        pub repository: Option<Shared<dyn ItemRepository>>,
    }
}

fn main() -> Result<(), inject::Error> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut injector = Injector::new();
    injector.provide_object(
        "DatabaseConnection",
        Some(Shared::new(DatabaseConnection {
            dsn: "host=127.0.0.1 database=items".to_string(),
        })),
    );

    let mut standard = StandardItemRepository { connection: None };
    inject!(injector; &mut standard)?;
    let standard: Shared<dyn ItemRepository> = Shared::new(standard);

    // The cache wraps the standard repository; everything else talks to the cache.
    injector.provide_object("ItemRepository", Some(standard.clone()));
    let mut caching = CachingItemRepository { inner: None };
    inject!(injector; &mut caching)?;
    let caching: Shared<dyn ItemRepository> = Shared::new(caching);

    injector.provide_with("ItemRepository", move |receiver| {
        if receiver.is::<CachingItemRepository>() {
            Some(Some(standard.clone()))
        } else {
            Some(Some(caching.clone()))
        }
    });

    let mut service = ItemService { repository: None };
    inject!(injector; &mut service)?;

    println!("Injector: {:?}", injector);
    if let Some(repository) = &service.repository {
        println!("Service uses {}", repository.describe());
    }

    Ok(())
}
