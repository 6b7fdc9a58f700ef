/*!

This is the long-form manual for `ai_salience` and the `salience` program.

## Input tables

All the tables are spreadsheets (`.xlsx`) or comma separated files (`.csv`).
The first row holds the column names. Columns may come in any order, and
columns that are not listed here are ignored.

### Sentences

One row per sentence of a party program that mentions artificial intelligence.

| column                | content                                                  |
|-----------------------|----------------------------------------------------------|
| `Party`               | the name of the party, e.g. `VVD`                        |
| `Year`                | the year of the program, as an integer (`2023`)          |
| `Translated_Sentence` | the sentence, translated to English                      |
| `Dimension`           | one or more tags joined by commas (`Ethical,Security`)   |
| `Sentiment`           | the sentiment label of the sentence                      |

The dimension tags are drawn from: `Ethical`, `Societal`, `Policy / Regulation`,
`Security`, `Labour`, `Economic`, `Uncategorized`.

### Word counts

| column        | content                               |
|---------------|---------------------------------------|
| `Party`       | the name of the party                 |
| `Year`        | the year of the program               |
| `Total_Words` | the number of words of the program    |

There must be at most one row for each party and year. A duplicate row is an
error, since it would make the rate of that party ambiguous.

### Dimension summary (optional)

`Party`, `Year`, then one numeric column per dimension of the vocabulary. When
this table is not provided, the counts are computed from the `Dimension`
column of the sentences.

## Outputs

### Rate

For each party and year found in the sentences, the number of sentences per
10,000 words of the program. The rate is left undefined (and reported as such)
when the program has no word count or a word count of zero.

### Change table

One row per party with the rates of the two compared years and their
difference (Δ). A party that is absent in one of the years counts as zero for
that year. The table is sorted by decreasing Δ, then by party name.

If one of the two years does not appear in the data at all, Δ cannot be
computed: the table is still produced, with all the differences set to zero,
along with a warning.

### Examples

Up to five sentences (by default) of a party in a given year whose `Dimension`
contains the requested text, ignoring case. `eco` matches `Economic` and
`Socio-economic`.

*/
