use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

/// One entry in the relance template catalog.
///
/// A template carries either a message body (`corps`) or call-script notes
/// (`notes_appel`), never neither. Placeholders use the `[VARIABLE]` form.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub canal: String,
    pub delai: Option<String>,
    pub sujet: Option<String>,
    pub corps: Option<String>,
    pub notes_appel: Option<String>,
}

fn entry(
    canal: &str,
    delai: Option<&str>,
    sujet: Option<&str>,
    corps: Option<&str>,
    notes_appel: Option<&str>,
) -> Template {
    Template {
        canal: canal.to_string(),
        delai: delai.map(str::to_string),
        sujet: sujet.map(str::to_string),
        corps: corps.map(str::to_string),
        notes_appel: notes_appel.map(str::to_string),
    }
}

static CATALOG: LazyLock<BTreeMap<&'static str, Template>> = LazyLock::new(|| {
    BTreeMap::from([
        // RELANCE 1 - J+3 (Email)
        (
            "relance_1_email",
            entry(
                "email",
                Some("J+3 après démo"),
                Some("[NOM_CABINET] - Suite à notre échange"),
                Some(
                    r#"Bonjour [PRENOM],

Merci pour le temps accordé lors de notre démo le [DATE_DEMO].

J'espère que notre présentation de la solution DIV Protocol a répondu à vos besoins en matière de cloud souverain pour [NOM_CABINET].

Pour rappel, nos 3 avantages clés pour votre cabinet :
• Conformité RGPD garantie (hébergement France)
• Sécurité renforcée (chiffrement bout-en-bout)
• Souveraineté numérique (aucune clause Cloud Act)

Je reste disponible pour toute question ou pour planifier un point technique avec votre DSI/DPO.

Souhaitez-vous que je vous envoie une proposition commerciale détaillée ?

Bien cordialement,
Gaspard Bonnot
CEO - DIV Protocol
[EMAIL] | [TEL]"#,
                ),
                None,
            ),
        ),
        // RELANCE 2 - J+7 (LinkedIn)
        (
            "relance_2_linkedin",
            entry(
                "linkedin",
                Some("J+7 après démo"),
                None,
                Some(
                    r#"Bonjour [PRENOM],

Suite à notre démo du [DATE_DEMO], je voulais savoir si vous aviez eu l'occasion d'en discuter en interne ?

Beaucoup de cabinets d'avocats nous rejoignent actuellement pour sécuriser leurs données clients face aux risques du Cloud Act américain.

Je serais ravi d'échanger 10 minutes au téléphone pour répondre à vos éventuelles questions.

Vous êtes disponible cette semaine ?

Gaspard"#,
                ),
                None,
            ),
        ),
        // RELANCE 3 - J+14 (Email - proposition commerciale)
        (
            "relance_3_email",
            entry(
                "email",
                Some("J+14 après démo"),
                Some("[NOM_CABINET] - Proposition commerciale DIV Protocol"),
                Some(
                    r#"Bonjour [PRENOM],

Je reviens vers vous concernant notre solution de cloud souverain pour [NOM_CABINET].

Comme convenu lors de notre démo, vous trouverez ci-joint notre proposition commerciale détaillée incluant :
• Tarification adaptée à votre cabinet ([TAILLE] avocats)
• Timeline de déploiement (2-4 semaines)
• Accompagnement formation inclus
• Support dédié 24/7

**Offre de lancement :** -20% si signature avant fin de mois.

Je reste à votre disposition pour en discuter. Êtes-vous disponible pour un point téléphonique cette semaine ?

Bien cordialement,
Gaspard Bonnot
CEO - DIV Protocol
[EMAIL] | [TEL]"#,
                ),
                None,
            ),
        ),
        // RELANCE 4 - J+21 (Appel téléphonique)
        (
            "relance_4_tel",
            entry(
                "tel",
                Some("J+21 après démo"),
                None,
                None,
                Some(
                    r#"**Script appel téléphonique Relance 4 (J+21)**

1. **Accroche** (10 sec)
   "Bonjour [PRENOM], Gaspard de DIV Protocol. Je vous ai envoyé notre proposition commerciale il y a une semaine. Vous avez 2 minutes ?"

2. **Objectif** : Identifier le blocage / relancer la décision

3. **Questions clés** :
   - "Avez-vous pu consulter notre proposition ?"
   - "Qu'en pense votre direction / associés ?"
   - "Y a-t-il des points à clarifier côté technique ou budget ?"
   - "Quel est votre timing de décision ?"

4. **Objections courantes** :
   - "Budget" → Mentionner offre -20% fin de mois + étalement paiement possible
   - "Pas le temps" → Proposer démo express 15 min pour la direction
   - "On réfléchit encore" → "OK, puis-je vous rappeler dans 7 jours ?"

5. **Closing** :
   - Si intéressé : fixer RDV signature ou démo complémentaire
   - Si hésitant : date de rappel précise (J+7)
   - Si refus : demander feedback pour amélioration

6. **Notes post-appel** :
   - Résultat : [Positif / Neutre / Négatif]
   - Prochaine action : [...]
   - Date rappel : [...]"#,
                ),
            ),
        ),
        // RELANCE 5 - J+30 (Email - dernière tentative)
        (
            "relance_5_email",
            entry(
                "email",
                Some("J+30 après démo"),
                Some("[NOM_CABINET] - Dernière relance DIV Protocol"),
                Some(
                    r#"Bonjour [PRENOM],

Je n'ai pas eu de retour suite à mes derniers messages concernant notre solution de cloud souverain pour [NOM_CABINET].

Je comprends que vous soyez occupé ou que le projet ne soit pas prioritaire actuellement.

**Deux options :**

1️⃣ Si le sujet vous intéresse toujours : répondez simplement "OUI" et je vous recontacte au moment qui vous convient.

2️⃣ Si ce n'est pas d'actualité : un simple "NON" me permettra de ne plus vous solliciter (et je garde votre contact pour l'avenir).

Dans tous les cas, merci pour votre temps et votre considération.

Excellente journée,
Gaspard Bonnot
CEO - DIV Protocol
[EMAIL] | [TEL]"#,
                ),
                None,
            ),
        ),
        // TEMPLATES SMS/WHATSAPP (courts)
        (
            "sms_relance_rapide",
            entry(
                "sms",
                None,
                None,
                Some(
                    "Bonjour [PRENOM], Gaspard (DIV Protocol). Suite à notre démo du [DATE_DEMO], avez-vous des questions ? Je reste dispo. 📞 [TEL]",
                ),
                None,
            ),
        ),
        (
            "whatsapp_relance_rapide",
            entry(
                "whatsapp",
                None,
                None,
                Some(
                    r#"Bonjour [PRENOM] 👋

Suite à notre démo DIV Protocol, j'espère que tout va bien chez [NOM_CABINET].

Avez-vous eu l'occasion d'en discuter en interne ?

Je reste à votre écoute pour toute question.

Gaspard"#,
                ),
                None,
            ),
        ),
    ])
});

/// The full immutable template catalog, keyed by template identifier.
pub fn catalog() -> &'static BTreeMap<&'static str, Template> {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_the_expected_templates() {
        let keys: Vec<_> = catalog().keys().copied().collect();

        assert_eq!(
            keys,
            vec![
                "relance_1_email",
                "relance_2_linkedin",
                "relance_3_email",
                "relance_4_tel",
                "relance_5_email",
                "sms_relance_rapide",
                "whatsapp_relance_rapide",
            ]
        );
    }

    #[test]
    fn every_template_has_a_text_field() {
        for (key, template) in catalog() {
            let has_corps = template.corps.as_deref().is_some_and(|t| !t.is_empty());
            let has_notes = template
                .notes_appel
                .as_deref()
                .is_some_and(|t| !t.is_empty());

            assert!(has_corps || has_notes, "{key} has neither corps nor notes");
        }
    }

    #[test]
    fn channels_are_known() {
        for (key, template) in catalog() {
            assert!(
                ["email", "linkedin", "tel", "sms", "whatsapp"].contains(&template.canal.as_str()),
                "{key} has unknown canal {}",
                template.canal
            );
        }
    }

    #[test]
    fn only_the_call_script_uses_notes() {
        let tel = catalog().get("relance_4_tel").unwrap();
        assert!(tel.corps.is_none());
        assert!(tel.notes_appel.is_some());

        for (key, template) in catalog() {
            if *key != "relance_4_tel" {
                assert!(template.notes_appel.is_none(), "{key}");
            }
        }
    }
}
