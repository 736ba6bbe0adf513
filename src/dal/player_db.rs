use sqlx::PgPool;

use crate::domain::PlayerRecord;

pub async fn insert_player(pool: &PgPool, player: &PlayerRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        insert into players2025 (
            name, nationality, position, team, age,
            matches_played, starts, minutes, goals,
            assists, pk_made, xg, xag
        ) values (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
        )
        "#,
    )
    .bind(&player.name)
    .bind(&player.nationality)
    .bind(&player.position)
    .bind(&player.team)
    .bind(player.age)
    .bind(player.matches_played)
    .bind(player.starts)
    .bind(player.minutes)
    .bind(player.goals)
    .bind(player.assists)
    .bind(player.pk_made)
    .bind(player.xg)
    .bind(player.xag)
    .execute(pool)
    .await?;

    Ok(())
}
