#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use anyhow::{Context, Result};
    use rescue_site_shared::{
        auth::{Access, AuthGate, Guard},
        crud::{CrudController, TabPhase, WriteOp},
        memory::{Call, InMemoryBackend},
        resource::ResourceKind,
        session::{MemorySessionStore, SessionStore, TOKEN_KEY},
    };
    use serde_json::json;

    #[tokio::test]
    async fn admin_signs_in_edits_gallery_and_signs_out() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::seeded());
        let store = MemorySessionStore::new();

        let mut gate = AuthGate::new(store.clone());
        assert_eq!(gate.authorize(Guard::Admin), Access::Pending);
        gate.restore();
        assert_eq!(gate.authorize(Guard::Admin), Access::ShowLogin);

        gate.login(backend.as_ref(), "admin@example.org").await?;
        assert_eq!(gate.authorize(Guard::Admin), Access::Granted);
        let token = gate.token().context("token after login")?.to_string();
        assert_eq!(store.get(TOKEN_KEY), Some(token));

        // A reload restores the same session from storage.
        let mut reloaded = AuthGate::new(store.clone());
        reloaded.restore();
        assert_eq!(reloaded.session(), gate.session());

        let mut gallery = CrudController::new(backend.clone(), ResourceKind::Gallery);
        gallery.refresh().await?;
        let before = gallery.state().records.len();

        gallery.begin_create();
        gallery.edit_field("title", "Night drill");
        gallery.edit_field("category", "training");
        gallery.upload("drill.jpg".to_string()).await?;
        assert_eq!(gallery.save().await?, Some(WriteOp::Create));
        assert_eq!(gallery.state().records.len(), before + 1);

        let created = gallery
            .state()
            .records
            .iter()
            .find(|record| record.text("title") == "Night drill")
            .cloned()
            .context("created item listed")?;
        assert_eq!(
            created.text("imageUrl"),
            "https://images.example.org/gallery/drill.jpg"
        );
        assert_eq!(created.text("cloudinaryId"), "gallery/drill.jpg");

        let id = created.id().context("id")?;
        assert!(gallery.delete(&id, || true).await?);
        assert_eq!(gallery.state().records.len(), before);
        assert_eq!(gallery.state().phase, TabPhase::Loaded);

        gate.logout();
        assert!(store.is_empty());
        let mut after = AuthGate::new(store);
        after.restore();
        assert_eq!(after.authorize(Guard::Admin), Access::ShowLogin);
        Ok(())
    }

    #[tokio::test]
    async fn visitor_without_admin_flag_never_reaches_console() -> Result<()> {
        let backend = InMemoryBackend::seeded();
        let mut gate = AuthGate::new(MemorySessionStore::new());
        gate.restore();

        gate.login(&backend, "visitor@example.org").await?;
        assert!(gate.is_authenticated());
        assert_eq!(gate.authorize(Guard::Admin), Access::ShowLogin);
        Ok(())
    }

    #[tokio::test]
    async fn tabs_keep_isolated_state() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::seeded());
        let mut stories = CrudController::new(backend.clone(), ResourceKind::Stories);
        let mut donations = CrudController::new(backend.clone(), ResourceKind::Donations);
        stories.refresh().await?;
        donations.refresh().await?;

        let donation = donations.state().records[0].clone();
        donations.begin_edit(donation);
        stories.begin_create();

        donations.edit_field("status", "completed");
        let op = donations.save().await?;
        assert!(matches!(op, Some(WriteOp::Update(Some(_)))));
        assert_eq!(donations.state().records[0].text("status"), "completed");

        // The stories draft is untouched by the donations save.
        assert_eq!(stories.state().phase, TabPhase::Editing);
        assert!(stories.state().editing.is_some());

        backend.insert(ResourceKind::Stories, json!({"title": "Late arrival"}));
        assert!(!backend
            .calls()
            .iter()
            .any(|call| matches!(call, Call::Create(ResourceKind::Stories))));
        Ok(())
    }
}
