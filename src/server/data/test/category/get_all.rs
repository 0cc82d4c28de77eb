use super::*;

/// Tests categories are listed alphabetically.
///
/// Expected: Ok with categories sorted by name
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    for name in ["Tools", "Books", "Garden"] {
        repo.create(CategoryParams {
            name: name.to_string(),
            description: None,
        })
        .await?;
    }

    let categories = repo.get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Books", "Garden", "Tools"]);

    Ok(())
}

/// Tests resolving which of the given ids exist.
///
/// Expected: Ok with only the stored id
#[tokio::test]
async fn existing_ids_skips_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryFactory::new(db).name("Music").build().await?;

    let repo = CategoryRepository::new(db);
    let existing = repo.existing_ids(&[category.id, category.id + 100]).await?;

    assert_eq!(existing, vec![category.id]);
    assert!(repo.existing_ids(&[]).await?.is_empty());
    assert!(repo.name_taken("Music", None).await?);
    assert!(!repo.name_taken("Music", Some(category.id)).await?);

    Ok(())
}
