//! End-to-end exercise of the persistence contracts against the in-memory
//! repository and data context.

use groundwork_domain::{Entity, define_entity_id, impl_entity_equality};
use groundwork_outcome::FailureOrNothing;
use groundwork_persistence::{
    CancellationToken, DataContext, InMemoryDataContext, InMemoryRepository, PaginatedRepository,
    PersistenceError, ProvidesSet, Repository,
};

define_entity_id! {
    /// Sequential customer identifier (datastore-assigned in production).
    pub struct CustomerId(i64);
}

#[derive(Debug, Clone)]
struct Customer {
    id: CustomerId,
    name: String,
    active: bool,
}

impl Customer {
    fn new(id: i64, name: &str, active: bool) -> Self {
        Self {
            id: CustomerId::new(id),
            name: name.to_string(),
            active,
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

impl_entity_equality!(Customer);

async fn seeded_repository(count: i64) -> InMemoryRepository<Customer> {
    let repo = InMemoryRepository::new();
    for n in 1..=count {
        let customer = Customer::new(n, &format!("customer-{n}"), n % 2 == 1);
        repo.add(customer).await.expect("seeding must succeed");
    }
    repo
}

#[tokio::test]
async fn crud_round_trip() {
    groundwork_observability::init();

    let repo = InMemoryRepository::new();
    let id = CustomerId::new(1);

    repo.add(Customer::new(1, "Ada", true)).await.unwrap();
    assert!(repo.has_by_id(&id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);

    let found = repo.find_by_id(&id).await.unwrap().expect("must exist");
    assert_eq!(found.name, "Ada");

    repo.update(Customer::new(1, "Ada Lovelace", true)).await.unwrap();
    let updated = repo.find_by_id(&id).await.unwrap().expect("must exist");
    assert_eq!(updated.name, "Ada Lovelace");

    repo.delete_by_id(&id).await.unwrap();
    assert!(!repo.has_by_id(&id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn absence_is_reported_as_none_not_an_error() {
    let repo = InMemoryRepository::<Customer>::new();
    let missing = repo.find_by_id(&CustomerId::new(404)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn updating_a_missing_entity_is_not_found() {
    let repo = InMemoryRepository::new();
    let err = repo
        .update(Customer::new(9, "Nobody", false))
        .await
        .unwrap_err();

    match err {
        PersistenceError::NotFound(inner) => assert_eq!(
            inner.to_string(),
            "Item with key value '9' does not exist in the datastore. Parameter name: 'entity'."
        ),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn deleting_a_missing_entity_is_not_found() {
    let repo = InMemoryRepository::<Customer>::new();
    let err = repo.delete_by_id(&CustomerId::new(9)).await.unwrap_err();

    match err {
        PersistenceError::NotFound(inner) => assert_eq!(
            inner.to_string(),
            "Item with key value '9' does not exist in the datastore. Parameter name: 'id'."
        ),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn adding_a_duplicate_id_is_a_conflict() {
    let repo = InMemoryRepository::new();
    repo.add(Customer::new(1, "Ada", true)).await.unwrap();

    let err = repo.add(Customer::new(1, "Grace", false)).await.unwrap_err();
    assert!(matches!(err, PersistenceError::Conflict(_)));
}

#[tokio::test]
async fn filters_drive_queries_and_counts() {
    let repo = seeded_repository(6).await;

    let active = repo
        .find_all_by_filter(&|c: &Customer| c.active)
        .await
        .unwrap();
    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|c| c.active));

    let inactive = repo
        .count_by_filter(&|c: &Customer| !c.active)
        .await
        .unwrap();
    assert_eq!(inactive, 3);
}

#[tokio::test]
async fn listings_come_back_in_id_order() {
    let repo = InMemoryRepository::new();
    for n in [3_i64, 1, 2] {
        repo.add(Customer::new(n, &format!("customer-{n}"), true))
            .await
            .unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|c| *c.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn paging_walks_the_collection_in_id_order() {
    let repo = seeded_repository(5).await;

    let first = repo.find_all_with_paging(1, 2).await.unwrap();
    let ids: Vec<i64> = first.iter().map(|c| *c.id().value()).collect();
    assert_eq!(ids, vec![1, 2]);

    let second = repo.find_all_with_paging(2, 2).await.unwrap();
    let ids: Vec<i64> = second.iter().map(|c| *c.id().value()).collect();
    assert_eq!(ids, vec![3, 4]);

    let last = repo.find_all_with_paging(3, 2).await.unwrap();
    assert_eq!(last.len(), 1);

    let past_the_end = repo.find_all_with_paging(4, 2).await.unwrap();
    assert!(past_the_end.is_empty());
}

#[tokio::test]
async fn paging_preconditions_are_enforced() {
    let repo = seeded_repository(2).await;

    for (page, page_size) in [(0, 2), (1, 0), (0, 0)] {
        let err = repo.find_all_with_paging(page, page_size).await.unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidArgument(_)));
    }
}

#[tokio::test]
async fn save_changes_reports_and_resets_pending_writes() {
    let ctx = InMemoryDataContext::<Customer>::new();

    ctx.set().add(Customer::new(1, "Ada", true)).await.unwrap();
    ctx.set().add(Customer::new(2, "Grace", true)).await.unwrap();
    ctx.set()
        .update(Customer::new(2, "Grace Hopper", true))
        .await
        .unwrap();
    assert_eq!(ctx.set().pending_writes(), 3);

    assert_eq!(ctx.save_changes().await.unwrap(), 3);
    assert_eq!(ctx.set().pending_writes(), 0);
    assert_eq!(ctx.save_changes().await.unwrap(), 0);
}

#[tokio::test]
async fn a_cancelled_commit_surfaces_as_cancelled() {
    let ctx = InMemoryDataContext::<Customer>::new();
    ctx.set().add(Customer::new(1, "Ada", true)).await.unwrap();

    let token = CancellationToken::new();
    token.cancel();

    let err = ctx.save_changes_with_cancel(&token).await.unwrap_err();
    assert!(matches!(err, PersistenceError::Cancelled));

    // The pending changes were not consumed by the cancelled attempt.
    assert_eq!(ctx.save_changes_with_cancel(&CancellationToken::new()).await.unwrap(), 1);
}

#[tokio::test]
async fn raw_statements_are_accepted_without_effect() {
    let ctx = InMemoryDataContext::<Customer>::new();
    let affected = ctx
        .execute_raw("DELETE FROM customers WHERE id = ?", &[serde_json::json!(1)])
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn persistence_failures_speak_the_outcome_vocabulary() {
    let repo = InMemoryRepository::<Customer>::new();
    let err = repo.delete_by_id(&CustomerId::new(9)).await.unwrap_err();

    let outcome = FailureOrNothing::from(err);
    let verdict = outcome.resolve(|| "ok".to_string(), |f| f.message().to_string());
    assert!(verdict.contains("does not exist in the datastore"));

    let fault = outcome.escalate().unwrap_err();
    let persistence = fault
        .downcast_ref::<PersistenceError>()
        .expect("original persistence error must be preserved");
    assert!(matches!(persistence, PersistenceError::NotFound(_)));
}
