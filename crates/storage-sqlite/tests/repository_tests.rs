//! Integration tests for the SQLite repositories against a temporary database.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use tempfile::TempDir;

use tither_core::donations::{DonationRepositoryTrait, NewDonation};
use tither_core::donors::{DonorRepositoryTrait, NewDonor};
use tither_core::errors::{DatabaseError, Error};
use tither_core::funds::{default_funds, FundRepositoryTrait, FundUpdate, NewFund};
use tither_core::ledger::{LedgerCalculator, LedgerRepositoryTrait, LedgerService, LedgerServiceTrait};
use tither_core::organizations::{NewOrganization, OrganizationRepositoryTrait};
use tither_core::roundup::RoundUpOption;
use tither_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, DbPool, DonationRepository, DonorRepository,
    FundRepository, LedgerRepository, OrganizationRepository, WriteHandle,
};

struct TestDb {
    _dir: TempDir,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("db").join("tither.db");
    let db_path = init(db_path.to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer(pool.clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

impl TestDb {
    fn organizations(&self) -> OrganizationRepository {
        OrganizationRepository::new(self.pool.clone(), self.writer.clone())
    }

    fn funds(&self) -> FundRepository {
        FundRepository::new(self.pool.clone(), self.writer.clone())
    }

    fn donors(&self) -> DonorRepository {
        DonorRepository::new(self.pool.clone(), self.writer.clone())
    }

    fn donations(&self) -> DonationRepository {
        DonationRepository::new(self.pool.clone(), self.writer.clone())
    }
}

fn donation(organization_id: &str, amount: rust_decimal::Decimal) -> NewDonation {
    NewDonation {
        id: None,
        organization_id: organization_id.to_string(),
        donor_id: None,
        fund_id: None,
        amount,
        fund_name: None,
        donor_name: None,
        is_anonymous: false,
        created_at: None,
    }
}

#[tokio::test]
async fn test_organization_round_trip() {
    let db = setup();
    let repo = db.organizations();

    let mut new_organization = NewOrganization::new("Grace Chapel", "grace-chapel");
    new_organization.giving_page.goal_amount = Some(dec!(12500.50));
    new_organization.giving_page.round_up_options = vec![RoundUpOption::Nearest5];
    let created = repo.create(new_organization).await.unwrap();

    let loaded = repo.find_by_id(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.giving_page.goal_amount, Some(dec!(12500.50)));
    assert_eq!(
        loaded.giving_page.suggested_amounts,
        vec![dec!(25), dec!(50), dec!(100), dec!(250)]
    );
    assert_eq!(loaded.giving_page.round_up_options, vec![RoundUpOption::Nearest5]);

    let by_slug = repo.find_by_slug("grace-chapel").unwrap().unwrap();
    assert_eq!(by_slug.id, created.id);
    assert!(repo.find_by_slug("nope").unwrap().is_none());
    assert_eq!(repo.find_first().unwrap().unwrap().id, created.id);
}

#[tokio::test]
async fn test_organization_update_and_listing() {
    let db = setup();
    let repo = db.organizations();
    let mut draft = repo
        .create(NewOrganization::new("Draft Org", "draft"))
        .await
        .unwrap();
    let mut published = NewOrganization::new("Hope Center", "hope");
    published.onboarding_complete = true;
    repo.create(published).await.unwrap();

    draft.giving_page.goal_amount = Some(dec!(500));
    draft.onboarding_complete = true;
    let updated = repo.update(draft.clone()).await.unwrap();
    assert_eq!(updated.giving_page.goal_amount, Some(dec!(500)));

    draft.giving_page.goal_amount = None;
    let cleared = repo.update(draft).await.unwrap();
    assert_eq!(cleared.giving_page.goal_amount, None);

    assert_eq!(repo.list(Some(true)).unwrap().len(), 2);
    assert_eq!(repo.list(Some(false)).unwrap().len(), 0);
    assert_eq!(repo.list(None).unwrap().len(), 2);
}

#[tokio::test]
async fn test_duplicate_slug_is_unique_violation() {
    let db = setup();
    let repo = db.organizations();
    repo.create(NewOrganization::new("One", "same")).await.unwrap();

    let result = repo.create(NewOrganization::new("Two", "same")).await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}

#[tokio::test]
async fn test_create_with_funds_seeds_the_new_organization() {
    let db = setup();

    let (org, seeded) = db
        .organizations()
        .create_with_funds(NewOrganization::new("Grace Chapel", "grace"), default_funds(""))
        .await
        .unwrap();

    assert_eq!(seeded.len(), 4);
    assert!(seeded.iter().all(|f| f.organization_id == org.id));
    assert_eq!(db.funds().list_by_organization(&org.id).unwrap(), seeded);
}

#[tokio::test]
async fn test_create_with_funds_is_all_or_nothing() {
    let db = setup();
    let fund = |name: &str| NewFund {
        id: Some("fund-1".to_string()),
        organization_id: String::new(),
        name: name.to_string(),
        enabled: true,
        sort_order: 0,
    };

    let result = db
        .organizations()
        .create_with_funds(
            NewOrganization::new("Grace Chapel", "grace"),
            vec![fund("General Fund"), fund("Building Fund")],
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
    assert!(db.organizations().find_by_slug("grace").unwrap().is_none());
    assert!(db.funds().find_by_id("fund-1").unwrap().is_none());
}

#[tokio::test]
async fn test_funds_crud() {
    let db = setup();
    let (org, _) = db
        .organizations()
        .create_with_funds(NewOrganization::new("Grace Chapel", "grace"), default_funds(""))
        .await
        .unwrap();
    let funds = db.funds();

    let extra = funds
        .create(NewFund {
            id: None,
            organization_id: org.id.clone(),
            name: "Missions".to_string(),
            enabled: true,
            sort_order: -1,
        })
        .await
        .unwrap();

    let listed = funds.list_by_organization(&org.id).unwrap();
    assert_eq!(listed.first().unwrap().id, extra.id);
    assert_eq!(listed[1].name, "General Fund");

    let mut outreach = listed.iter().find(|f| f.name == "Outreach").unwrap().clone();
    assert!(!outreach.enabled);
    FundUpdate {
        enabled: Some(true),
        ..Default::default()
    }
    .apply_to(&mut outreach)
    .unwrap();
    let updated = funds.update(outreach.clone()).await.unwrap();
    assert!(updated.enabled);

    assert_eq!(funds.delete(&extra.id).await.unwrap(), 1);
    assert_eq!(funds.delete(&extra.id).await.unwrap(), 0);
    assert!(funds.find_by_id(&extra.id).unwrap().is_none());
}

#[tokio::test]
async fn test_donor_lookup_by_normalized_email() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();
    let other = db
        .organizations()
        .create(NewOrganization::new("Hope Center", "hope"))
        .await
        .unwrap();
    let donors = db.donors();

    let created = donors
        .create(ruth(&org.id, "Ruth@Example.org"))
        .await
        .unwrap();

    assert_eq!(created.email.as_deref(), Some("ruth@example.org"));
    let found = donors
        .find_or_create(ruth(&org.id, " RUTH@example.org"))
        .await
        .unwrap();
    assert_eq!(found.id, created.id);

    let elsewhere = donors
        .find_or_create(ruth(&other.id, "ruth@example.org"))
        .await
        .unwrap();
    assert_ne!(elsewhere.id, created.id);
    assert_eq!(donors.list_by_organization(&org.id).unwrap().len(), 1);
}

fn ruth(organization_id: &str, email: &str) -> NewDonor {
    NewDonor {
        id: None,
        organization_id: organization_id.to_string(),
        name: "Ruth".to_string(),
        email: Some(email.to_string()),
        is_anonymous: false,
    }
}

#[tokio::test]
async fn test_concurrent_find_or_create_share_one_donor() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();
    let donors = db.donors();

    let (first, second) = tokio::join!(
        donors.find_or_create(ruth(&org.id, "ruth@example.org")),
        donors.find_or_create(ruth(&org.id, "Ruth@Example.org "))
    );

    assert_eq!(first.unwrap().id, second.unwrap().id);
    assert_eq!(donors.list_by_organization(&org.id).unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_gift_links_donor_and_donation() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();
    let existing = db
        .donors()
        .create(ruth(&org.id, "ruth@example.org"))
        .await
        .unwrap();

    let (donor, donation) = db
        .donations()
        .create_gift(
            Some(NewDonor {
                name: "Ruth M.".to_string(),
                ..ruth(&org.id, "RUTH@example.org")
            }),
            NewDonation {
                donor_name: Some("Ruth M.".to_string()),
                ..donation(&org.id, dec!(11.00))
            },
        )
        .await
        .unwrap();

    let donor = donor.unwrap();
    assert_eq!(donor.id, existing.id);
    assert_eq!(donation.donor_id.as_deref(), Some(existing.id.as_str()));
    assert_eq!(donation.donor_name.as_deref(), Some("Ruth"));
}

#[tokio::test]
async fn test_failed_gift_leaves_no_donor_behind() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();

    let result = db
        .donations()
        .create_gift(
            Some(ruth(&org.id, "ruth@example.org")),
            NewDonation {
                fund_id: Some("missing-fund".to_string()),
                ..donation(&org.id, dec!(10.00))
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));
    assert!(db.donors().list_by_organization(&org.id).unwrap().is_empty());
    assert!(db
        .donations()
        .list_by_organization(&org.id, None)
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_donations_order_limit_and_precision() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();
    let donations = db.donations();
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

    for (i, amount) in [dec!(10.10), dec!(20.20), dec!(0.01)].into_iter().enumerate() {
        donations
            .create(NewDonation {
                created_at: Some(base + Duration::hours(i as i64)),
                ..donation(&org.id, amount)
            })
            .await
            .unwrap();
    }

    let all = donations.list_by_organization(&org.id, None).unwrap();
    let amounts: Vec<_> = all.iter().map(|d| d.amount).collect();
    assert_eq!(amounts, vec![dec!(0.01), dec!(20.20), dec!(10.10)]);
    assert_eq!(all[2].created_at, base);

    let limited = donations.list_by_organization(&org.id, Some(1)).unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].amount, dec!(0.01));
}

#[tokio::test]
async fn test_donation_with_unknown_organization_is_rejected() {
    let db = setup();

    let result = db.donations().create(donation("missing", dec!(5.00))).await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));
}

#[tokio::test]
async fn test_deleting_fund_keeps_donation_history() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();
    let fund = db
        .funds()
        .create(NewFund {
            id: None,
            organization_id: org.id.clone(),
            name: "Roof Repair".to_string(),
            enabled: true,
            sort_order: 0,
        })
        .await
        .unwrap();
    db.donations()
        .create(NewDonation {
            fund_id: Some(fund.id.clone()),
            fund_name: Some(fund.name.clone()),
            ..donation(&org.id, dec!(75.00))
        })
        .await
        .unwrap();

    db.funds().delete(&fund.id).await.unwrap();

    let remaining = db.donations().list_by_organization(&org.id, None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].fund_id, None);
    assert_eq!(remaining[0].fund_name.as_deref(), Some("Roof Repair"));
}

#[tokio::test]
async fn test_ledger_snapshot_and_stats() {
    let db = setup();
    let org = db
        .organizations()
        .create(NewOrganization::new("Grace Chapel", "grace"))
        .await
        .unwrap();
    let other = db
        .organizations()
        .create(NewOrganization::new("Hope Center", "hope"))
        .await
        .unwrap();
    let donor = db
        .donors()
        .create(NewDonor {
            id: None,
            organization_id: org.id.clone(),
            name: "Ruth".to_string(),
            email: Some("ruth@example.org".to_string()),
            is_anonymous: true,
        })
        .await
        .unwrap();

    let now = Utc::now();
    db.donations()
        .create(NewDonation {
            donor_id: Some(donor.id.clone()),
            created_at: Some(now),
            ..donation(&org.id, dec!(10.00))
        })
        .await
        .unwrap();
    db.donations()
        .create(NewDonation {
            created_at: Some(now),
            ..donation(&other.id, dec!(99.00))
        })
        .await
        .unwrap();

    let repository = Arc::new(LedgerRepository::new(db.pool.clone()));
    let snapshot = repository.load_snapshot(&org.id).unwrap().unwrap();
    assert_eq!(snapshot.donations.len(), 1);
    assert_eq!(snapshot.donors.len(), 1);
    assert!(repository.load_snapshot("missing").unwrap().is_none());

    let service = LedgerService::new(repository, LedgerCalculator::default());
    let stats = service.get_organization_stats(&org.id, now).unwrap();
    assert_eq!(stats.month_total, dec!(10.00));
    assert_eq!(stats.gift_count_year, 1);

    let donor_stats = service.get_donor_stats(&org.id, now).unwrap();
    assert_eq!(donor_stats[0].name, "Anonymous");
    assert_eq!(donor_stats[0].email, None);
    assert_eq!(donor_stats[0].total_gifts, dec!(10.00));

    assert!(matches!(
        service.get_organization_stats("missing", now),
        Err(Error::UnknownOrganization(_))
    ));
}
